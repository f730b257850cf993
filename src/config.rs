use {crate::catalog::DEFAULT_UPSTREAM, clap::Parser};

/// Proxies the Star Wars film catalog as server-rendered pages.
#[derive(Debug, Clone, Parser)]
#[command(name = "film-catalog", version)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "FILM_CATALOG_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Base URL of the upstream film catalog API.
    #[arg(long, env = "FILM_CATALOG_UPSTREAM", default_value = DEFAULT_UPSTREAM)]
    pub upstream: String,

    /// Tracing filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}
