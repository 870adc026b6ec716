//! Route path formatting
//!
//! Maps route-parameter tuples to the files they publish as, relative to
//! the output directory:
//!
//! - instituto page: `{sigla}/index.html`
//! - curso score page: `{sigla}/{curso}/notas-{exam}.html`
//!
//! Sigla and curso names are used verbatim as path segments, mirroring
//! the route surface of the published site; hosts with stricter path
//! rules own any escaping.

use std::path::PathBuf;

use vestibulando_core::paths::{CursoParams, InstitutoParams};

/// Relative output file for an instituto page
pub fn instituto_route(params: &InstitutoParams) -> PathBuf {
    [params.instituto.as_str(), "index.html"].iter().collect()
}

/// Relative output file for a curso score page
pub fn curso_route(params: &CursoParams, exam: &str) -> PathBuf {
    [
        params.instituto.as_str(),
        params.curso.as_str(),
        &format!("notas-{exam}.html"),
    ]
    .iter()
    .collect()
}
