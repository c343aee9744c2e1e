//! Loads the static list of places.
//!
//! The catalog is a JSON array of [`Place`] records read from a local file
//! or an http(s) URL. Loading is a single attempt; on failure the app carries
//! on with an empty catalog.

use std::path::PathBuf;

use reqwest::Client;
use url::Url;

use crate::place::Place;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Catalog is not a valid list of places: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl CatalogSource {
    /// `http://` and `https://` sources are fetched; everything else is a path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => CatalogSource::Url(url),
            _ => CatalogSource::File(PathBuf::from(raw)),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceCatalogLoader {
    source: CatalogSource,
    client: Client,
}

impl PlaceCatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            client: Client::new(),
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load all places. Never fails: errors are logged and yield an empty list.
    pub async fn load_places(&self) -> Vec<Place> {
        match self.try_load().await {
            Ok(places) => {
                tracing::info!("Loaded {} places from {}", places.len(), self.source);
                places
            }
            Err(e) => {
                tracing::error!("Failed to load places from {}: {}", self.source, e);
                Vec::new()
            }
        }
    }

    pub async fn try_load(&self) -> Result<Vec<Place>, CatalogError> {
        let body = match &self.source {
            CatalogSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            CatalogSource::Url(url) => {
                self.client
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        Ok(serde_json::from_str(&body)?)
    }
}
