//! # Vestibulando Site
//!
//! The build orchestrator for the vestibulando static site.
//!
//! One build is the two-phase contract that makes ahead-of-time generation
//! sound: fetch the catalog snapshot once, enumerate every route, then
//! resolve and render each route against that same snapshot. Enumeration
//! and resolution agree by construction (both live in
//! `vestibulando-core`), so any resolution miss during the build loop is
//! an internal inconsistency and aborts the whole build — no partial site
//! is ever the intended output.
//!
//! ## Key Types
//!
//! - [`SiteConfig`]: output directory and admission-exam kind
//! - [`PageRenderer`]: the rendering collaborator seam
//! - [`build_site`]: the orchestrator itself

pub mod build;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;

// Re-export main types
pub use build::*;
pub use config::{Cli, Command, SiteConfig};
pub use error::*;
pub use render::*;
