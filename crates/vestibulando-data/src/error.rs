//! Error types for catalog data sources

use thiserror::Error;

/// Errors that can occur while fetching the catalog
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read the catalog document from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to fetch the catalog document over HTTP
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The document was fetched but is not a valid catalog
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for data-source operations
pub type DataResult<T> = Result<T, DataError>;
