//! # Vestibulando Data
//!
//! The data-source capability for the site build: fetch the current
//! [`Catalog`](vestibulando_core::Catalog) tree, exactly once per build.
//!
//! The build orchestrator consumes a [`CatalogSource`] and treats the
//! returned catalog as an immutable snapshot for the rest of the build.
//! Transport concerns (where the JSON lives, how it is fetched) stay
//! behind the trait:
//!
//! - [`StaticSource`]: an in-memory catalog, for tests and demos
//! - [`FileSource`]: a JSON document on disk
//! - [`HttpSource`]: a JSON endpoint over HTTP

pub mod error;
pub mod source;

// Re-export main types
pub use error::*;
pub use source::*;
