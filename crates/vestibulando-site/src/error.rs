//! Error types for the site build

use thiserror::Error;

use vestibulando_core::ResolveError;
use vestibulando_data::DataError;

/// Errors that can abort a site build
#[derive(Debug, Error)]
pub enum BuildError {
    /// The catalog snapshot could not be fetched
    #[error("Data source error: {0}")]
    Data(#[from] DataError),

    /// An enumerated route failed to resolve against the same snapshot
    ///
    /// Enumeration and resolution act on one immutable snapshot, so this
    /// is an internal inconsistency, never an expected miss. The build
    /// aborts; no partial site is published.
    #[error("route {route} failed to resolve: {source}")]
    UnresolvedRoute {
        route: String,
        source: ResolveError,
    },

    /// Failed to write a generated page
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;
