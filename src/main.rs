mod catalog;
mod config;
mod logger;
mod services;
mod views;

use {
    crate::{catalog::Catalog, config::Config, logger::TracingLogger},
    actix_web::{web, App, HttpServer},
    clap::Parser as _,
    tracing_log::LogTracer,
    tracing_subscriber::{fmt::Layer, layer::SubscriberExt as _, EnvFilter, Registry},
};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    LogTracer::init()?;

    tracing::subscriber::set_global_default(
        Registry::default()
            .with(EnvFilter::try_new(&config.log)?)
            .with(Layer::default()),
    )?;

    let catalog = web::Data::new(Catalog::new(&config.upstream));

    tracing::info!(bind = %config.bind, upstream = %config.upstream, "Starting film catalog");

    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .service(services::admin())
            .service(services::movies())
            .wrap(TracingLogger)
    })
    .bind(&config.bind)?
    .run()
    .await?;

    Ok(())
}
