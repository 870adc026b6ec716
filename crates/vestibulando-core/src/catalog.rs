//! Catalog entity model
//!
//! The catalog is the whole dataset for one build: campi own institutos,
//! institutos own cursos, cursos own score tables keyed by admission-exam
//! kind. Entities are read-only once loaded; a build never mutates them,
//! and a new dataset arrives only as a whole-tree replacement.
//!
//! The serde field names follow the source dataset, including the accented
//! `descrição` key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full dataset for one build
///
/// Immutable for the duration of a build; the enumeration and resolution
/// phases both operate on the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All campi, in dataset order
    #[serde(rename = "campus")]
    pub campi: Vec<Campus>,
}

/// A physical site owning a list of institutos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    pub nome: String,
    pub institutos: Vec<Instituto>,
}

/// An academic unit, identified by its sigla
///
/// The sigla is unique across the catalog and doubles as the route
/// parameter for the instituto page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instituto {
    pub sigla: String,
    pub nome: String,
    #[serde(rename = "descrição")]
    pub descricao: String,
    pub cursos: Vec<Curso>,
}

/// A program of study under one instituto
///
/// Curso names are unique within their instituto, not across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curso {
    pub nome: String,
    #[serde(rename = "descrição")]
    pub descricao: String,
    /// Score tables keyed by admission-exam kind (e.g. "fuvest")
    ///
    /// A curso may have no table for a given exam; that is an empty
    /// result, not an error. BTreeMap keeps iteration and serialization
    /// order deterministic.
    #[serde(default)]
    pub notas: BTreeMap<String, Vec<Nota>>,
}

/// One row of an admission score table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nota {
    /// Admission year
    pub ano: u16,
    /// Admission modality (quota category)
    pub modalidade: String,
    /// Final cutoff score for that year and modality
    pub nota_final: f64,
}

impl Catalog {
    /// Create a catalog from a list of campi
    pub fn new(campi: Vec<Campus>) -> Self {
        Self { campi }
    }

    /// True when the catalog holds no campi at all
    ///
    /// An empty catalog is a legal (if degenerate) snapshot: it enumerates
    /// to zero pages rather than failing.
    pub fn is_empty(&self) -> bool {
        self.campi.is_empty()
    }
}

impl Curso {
    /// Score rows for one exam kind, empty when the curso has no table
    /// for that exam
    pub fn notas_for(&self, exam: &str) -> &[Nota] {
        self.notas.get(exam).map(Vec::as_slice).unwrap_or(&[])
    }
}
