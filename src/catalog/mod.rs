pub mod model;

pub use self::model::{Film, FilmListing};

use serde::de::DeserializeOwned;

pub const DEFAULT_UPSTREAM: &str = "https://swapi.py4e.com/api";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("film catalog unreachable: {0}")]
    Transport(reqwest::Error),

    #[error("film catalog answered {0}")]
    Status(reqwest::StatusCode),

    #[error("film catalog sent an unreadable body: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Decode(err)
        } else {
            UpstreamError::Transport(err)
        }
    }
}

/// Client for the upstream film catalog.
///
/// Holds only the base URL; every call builds its own HTTP client and
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Catalog {
    base_url: String,
}

impl Catalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url }
    }

    pub fn films_url(&self) -> String {
        format!("{}/films/?format=json", self.base_url)
    }

    pub fn film_url(&self, id: u32) -> String {
        format!("{}/films/{}/?format=json", self.base_url, id)
    }

    pub async fn films(&self) -> Result<FilmListing, UpstreamError> {
        fetch(&self.films_url()).await
    }

    pub async fn film(&self, id: u32) -> Result<Film, UpstreamError> {
        fetch(&self.film_url(id)).await
    }
}

async fn fetch<T: DeserializeOwned>(url: &str) -> Result<T, UpstreamError> {
    tracing::debug!(%url, "Fetching from film catalog");

    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }

    Ok(response.json::<T>().await?)
}

/// Base URL of a local port that was just released, so nothing answers on it.
#[cfg(test)]
pub(crate) fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}
