//! Contract tests between enumeration and resolution
//!
//! The static build has no runtime fallback, so the enumerated path set
//! must be exactly the set of resolvable routes: everything enumerated
//! resolves (completeness) and nothing else does (soundness).

use vestibulando_core::paths::{course_paths, institute_paths, CursoParams, InstitutoParams};
use vestibulando_core::resolve::{resolve_curso, resolve_instituto};
use vestibulando_core::Catalog;

/// Two campi, three institutos, mixed curso counts, one curso with no
/// fuvest table at all
fn fixture() -> Catalog {
    serde_json::from_str(
        r#"{
            "campus": [
                {
                    "nome": "Butantã",
                    "institutos": [
                        {
                            "sigla": "EP",
                            "nome": "Escola Politécnica",
                            "descrição": "Engenharias",
                            "cursos": [
                                {
                                    "nome": "Engenharia",
                                    "descrição": "",
                                    "notas": {
                                        "fuvest": [
                                            { "ano": 2021, "modalidade": "AC", "nota_final": 690.0 },
                                            { "ano": 2022, "modalidade": "AC", "nota_final": 712.5 }
                                        ]
                                    }
                                },
                                { "nome": "Computação", "descrição": "", "notas": {} }
                            ]
                        },
                        {
                            "sigla": "IME",
                            "nome": "Instituto de Matemática",
                            "descrição": "Exatas",
                            "cursos": [
                                { "nome": "Matemática", "descrição": "", "notas": {} }
                            ]
                        }
                    ]
                },
                {
                    "nome": "São Carlos",
                    "institutos": [
                        { "sigla": "ICMC", "nome": "ICMC", "descrição": "", "cursos": [] }
                    ]
                }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn every_enumerated_instituto_path_resolves() {
    let catalog = fixture();
    for params in institute_paths(&catalog) {
        let page = resolve_instituto(&catalog, &params)
            .unwrap_or_else(|e| panic!("enumerated route failed to resolve: {e}"));
        assert_eq!(page.instituto.sigla, params.instituto);
    }
}

#[test]
fn every_enumerated_curso_path_resolves() {
    let catalog = fixture();
    for params in course_paths(&catalog) {
        let page = resolve_curso(&catalog, &params, "fuvest")
            .unwrap_or_else(|e| panic!("enumerated route failed to resolve: {e}"));
        assert_eq!(page.instituto.sigla, params.instituto);
        assert_eq!(page.curso.nome, params.curso);
    }
}

#[test]
fn resolution_rejects_tuples_outside_the_enumeration() {
    let catalog = fixture();

    assert!(resolve_instituto(&catalog, &InstitutoParams { instituto: "ZZ".into() }).is_err());
    assert!(resolve_curso(
        &catalog,
        &CursoParams { instituto: "EP".into(), curso: "Medicina".into() },
        "fuvest"
    )
    .is_err());
    // A curso that exists, but under a different instituto.
    assert!(resolve_curso(
        &catalog,
        &CursoParams { instituto: "IME".into(), curso: "Engenharia".into() },
        "fuvest"
    )
    .is_err());
}

#[test]
fn enumeration_counts_match_the_tree() {
    let catalog = fixture();
    assert_eq!(institute_paths(&catalog).len(), 3);
    assert_eq!(course_paths(&catalog).len(), 3);
}

#[test]
fn enumeration_is_byte_for_byte_idempotent() {
    let catalog = fixture();
    let first = serde_json::to_string(&institute_paths(&catalog)).unwrap();
    let second = serde_json::to_string(&institute_paths(&catalog)).unwrap();
    assert_eq!(first, second);

    let first = serde_json::to_string(&course_paths(&catalog)).unwrap();
    let second = serde_json::to_string(&course_paths(&catalog)).unwrap();
    assert_eq!(first, second);
}
