//! Entity resolution
//!
//! Maps one route-parameter tuple back to the entities that page needs,
//! walking the catalog through the same traversal helpers the enumerator
//! uses. A miss is a definite [`ResolveError::NotFound`]; a matched
//! instituto without an owning campus is a fatal
//! [`ResolveError::Inconsistent`], since the single-parent invariant makes
//! that impossible for well-formed data.
//!
//! Resolution is pure and single-pass: no retries, no partial results.

use crate::catalog::{Campus, Catalog, Curso, Instituto, Nota};
use crate::error::{ResolveError, ResolveResult};
use crate::paths::{CursoParams, InstitutoParams};
use crate::traverse;

/// Resolved entities for an instituto page
#[derive(Debug, Clone, Copy)]
pub struct InstitutoPage<'a> {
    pub instituto: &'a Instituto,
    pub campus: &'a Campus,
}

/// Resolved entities for a curso score page
#[derive(Debug, Clone, Copy)]
pub struct CursoPage<'a> {
    pub curso: &'a Curso,
    pub instituto: &'a Instituto,
    /// Score rows for the requested exam kind; empty when the curso has
    /// no table for that exam
    pub notas: &'a [Nota],
}

/// Resolve an instituto page from its route parameters
///
/// Picks the first sigla match in traversal order (relevant only when the
/// source data carries duplicate siglas), then finds the owning campus by
/// reverse membership lookup.
pub fn resolve_instituto<'a>(
    catalog: &'a Catalog,
    params: &InstitutoParams,
) -> ResolveResult<InstitutoPage<'a>> {
    let instituto = traverse::institutos(catalog)
        .find(|candidate| candidate.sigla == params.instituto)
        .ok_or_else(|| ResolveError::instituto_not_found(&params.instituto))?;

    let campus = traverse::campus_of(catalog, instituto).ok_or_else(|| {
        ResolveError::Inconsistent(format!(
            "instituto {} has no owning campus",
            instituto.sigla
        ))
    })?;

    Ok(InstitutoPage { instituto, campus })
}

/// Resolve a curso score page from its route parameters
///
/// Resolves the instituto first (propagating its miss unchanged), then the
/// first name-matching curso under it, then that curso's score table for
/// `exam`. An absent table is an empty row slice, not a failure.
pub fn resolve_curso<'a>(
    catalog: &'a Catalog,
    params: &CursoParams,
    exam: &str,
) -> ResolveResult<CursoPage<'a>> {
    let page = resolve_instituto(
        catalog,
        &InstitutoParams {
            instituto: params.instituto.clone(),
        },
    )?;

    let curso = page
        .instituto
        .cursos
        .iter()
        .find(|candidate| candidate.nome == params.curso)
        .ok_or_else(|| ResolveError::curso_not_found(&params.curso))?;

    Ok(CursoPage {
        curso,
        instituto: page.instituto,
        notas: curso.notas_for(exam),
    })
}
