//! # Vestibulando Core
//!
//! Entity model and page-resolution logic for the vestibulando static site.
//!
//! The site is generated in two phases that this crate keeps in lockstep:
//!
//! 1. **Enumerate** — [`paths`] flattens a [`Catalog`] snapshot into every
//!    route-parameter tuple the site must render.
//! 2. **Resolve** — [`resolve`] maps one tuple back to the entities that
//!    page needs, or fails with a definite [`ResolveError::NotFound`].
//!
//! Both phases walk the catalog through the same [`traverse`] helpers, so
//! every enumerated tuple is guaranteed to resolve against the same
//! snapshot. Everything here is pure and synchronous; fetching the catalog
//! belongs to the `vestibulando-data` crate.
//!
//! ## Key Types
//!
//! - [`Catalog`]: the full dataset for one build (campi → institutos →
//!   cursos → score tables)
//! - [`InstitutoParams`] / [`CursoParams`]: route-parameter tuples
//! - [`InstitutoPage`] / [`CursoPage`]: resolved entities for one page
//! - [`ResolveError`]: the miss/inconsistency taxonomy

pub mod catalog;
pub mod error;
pub mod paths;
pub mod resolve;
pub mod traverse;

// Re-export main types
pub use catalog::*;
pub use error::*;
pub use paths::*;
pub use resolve::*;
