//! Error types for catalog resolution

use std::fmt::{self, Display};

use thiserror::Error;

/// Which entity kind a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Instituto,
    Curso,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Instituto => write!(f, "instituto"),
            EntityKind::Curso => write!(f, "curso"),
        }
    }
}

/// Errors raised when resolving one route-parameter tuple
///
/// Only the resolver raises these; enumeration never fails. Within one
/// build both phases act on the same snapshot, so a `NotFound` surfacing
/// during the build loop is itself an internal inconsistency and must
/// abort the build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// The requested key does not exist in the current snapshot
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    /// An ownership invariant of the catalog was violated
    ///
    /// Fatal: continuing would publish a page with missing context.
    #[error("catalog inconsistency: {0}")]
    Inconsistent(String),
}

impl ResolveError {
    /// Shorthand for an instituto miss
    pub fn instituto_not_found(key: impl Into<String>) -> Self {
        ResolveError::NotFound {
            kind: EntityKind::Instituto,
            key: key.into(),
        }
    }

    /// Shorthand for a curso miss
    pub fn curso_not_found(key: impl Into<String>) -> Self {
        ResolveError::NotFound {
            kind: EntityKind::Curso,
            key: key.into(),
        }
    }
}

/// Result type alias for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;
