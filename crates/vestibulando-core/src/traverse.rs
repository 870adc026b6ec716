//! Shared catalog traversal helpers
//!
//! Enumeration and resolution must walk the tree in exactly the same
//! order, otherwise an enumerated route could fail to resolve. Both go
//! through these helpers: one flatten per nesting depth, plus the reverse
//! campus lookup.
//!
//! The walk is depth-first left-to-right: campi in dataset order, then
//! each campus's institutos in order, then each instituto's cursos in
//! order.

use crate::catalog::{Campus, Catalog, Curso, Instituto};

/// All institutos across all campi, in traversal order
pub fn institutos(catalog: &Catalog) -> impl Iterator<Item = &Instituto> {
    catalog.campi.iter().flat_map(|campus| campus.institutos.iter())
}

/// All (instituto, curso) pairs, in traversal order
pub fn cursos(catalog: &Catalog) -> impl Iterator<Item = (&Instituto, &Curso)> {
    institutos(catalog).flat_map(|instituto| {
        instituto.cursos.iter().map(move |curso| (instituto, curso))
    })
}

/// The campus owning an instituto, by membership lookup
///
/// The instituto must borrow from this catalog; membership is decided by
/// reference identity, not by sigla, so duplicate siglas cannot cross
/// wires. No back-pointer is stored on `Instituto` — the catalog is the
/// single source of ownership.
pub fn campus_of<'a>(catalog: &'a Catalog, instituto: &Instituto) -> Option<&'a Campus> {
    catalog.campi.iter().find(|campus| {
        campus
            .institutos
            .iter()
            .any(|candidate| std::ptr::eq(candidate, instituto))
    })
}
