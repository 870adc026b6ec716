//! Catalog source implementations

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use vestibulando_core::Catalog;

use crate::error::DataResult;

/// Abstraction over where the catalog snapshot comes from
///
/// The build calls [`fetch`](CatalogSource::fetch) exactly once and uses
/// the result as an immutable snapshot; caching and refresh cadence are
/// the implementation's business, not the caller's.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the current catalog tree
    async fn fetch(&self) -> DataResult<Catalog>;
}

/// An in-memory catalog, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    catalog: Catalog,
}

impl StaticSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> DataResult<Catalog> {
        Ok(self.catalog.clone())
    }
}

/// A catalog stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> DataResult<Catalog> {
        info!("Loading catalog from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// A catalog served as JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> DataResult<Catalog> {
        info!("Fetching catalog from {}", self.url);
        let catalog = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(catalog)
    }
}
