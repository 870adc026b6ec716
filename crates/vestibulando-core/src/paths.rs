//! Path enumeration
//!
//! Produces the complete set of route-parameter tuples the site must
//! generate, one entry per page. Enumeration is a pure function of the
//! catalog snapshot: no network, no rendering, and never an error — an
//! empty catalog simply enumerates to an empty set.
//!
//! Duplicate siglas in the source data are NOT deduplicated here; each
//! occurrence produces its own tuple, and resolution deterministically
//! picks the first in traversal order.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::traverse;

/// Route parameters for an instituto page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InstitutoParams {
    pub instituto: String,
}

/// Route parameters for a curso score page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CursoParams {
    pub instituto: String,
    pub curso: String,
}

/// One tuple per instituto reachable from any campus, in traversal order
pub fn institute_paths(catalog: &Catalog) -> Vec<InstitutoParams> {
    traverse::institutos(catalog)
        .map(|instituto| InstitutoParams {
            instituto: instituto.sigla.clone(),
        })
        .collect()
}

/// One tuple per (instituto, curso) pair, in traversal order
pub fn course_paths(catalog: &Catalog) -> Vec<CursoParams> {
    traverse::cursos(catalog)
        .map(|(instituto, curso)| CursoParams {
            instituto: instituto.sigla.clone(),
            curso: curso.nome.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Campus, Curso, Instituto};

    fn catalog_with(siglas: &[&str]) -> Catalog {
        Catalog::new(vec![Campus {
            nome: "C1".into(),
            institutos: siglas
                .iter()
                .map(|sigla| Instituto {
                    sigla: (*sigla).into(),
                    nome: (*sigla).into(),
                    descricao: String::new(),
                    cursos: vec![
                        Curso {
                            nome: "Engenharia".into(),
                            descricao: String::new(),
                            notas: Default::default(),
                        },
                        Curso {
                            nome: "Computação".into(),
                            descricao: String::new(),
                            notas: Default::default(),
                        },
                    ],
                })
                .collect(),
        }])
    }

    #[test]
    fn test_institute_paths_cover_every_instituto() {
        let catalog = catalog_with(&["EP", "IME"]);
        let paths = institute_paths(&catalog);
        assert_eq!(
            paths,
            [
                InstitutoParams { instituto: "EP".into() },
                InstitutoParams { instituto: "IME".into() },
            ]
        );
    }

    #[test]
    fn test_course_paths_cover_every_pair_in_order() {
        let catalog = catalog_with(&["EP"]);
        let paths = course_paths(&catalog);
        assert_eq!(
            paths,
            [
                CursoParams { instituto: "EP".into(), curso: "Engenharia".into() },
                CursoParams { instituto: "EP".into(), curso: "Computação".into() },
            ]
        );
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let catalog = catalog_with(&["EP", "IME", "FAU"]);
        assert_eq!(institute_paths(&catalog), institute_paths(&catalog));
        assert_eq!(course_paths(&catalog), course_paths(&catalog));
    }

    #[test]
    fn test_empty_catalog_enumerates_to_nothing() {
        let catalog = Catalog::default();
        assert!(institute_paths(&catalog).is_empty());
        assert!(course_paths(&catalog).is_empty());
    }

    #[test]
    fn test_duplicate_siglas_are_not_deduplicated() {
        let catalog = catalog_with(&["EP", "EP"]);
        let paths = institute_paths(&catalog);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], paths[1]);
    }
}
