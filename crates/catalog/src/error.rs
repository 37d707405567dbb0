use models::course::{CourseCode, CourseId};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Raised when the code index cannot be built from a course set
#[derive(Debug, Error)]
pub enum IndexError {
    /// Two records claim the same code with different identifiers
    #[error("course code {code} maps to both {existing} and {incoming}")]
    ConflictingIdentifier {
        code: CourseCode,
        existing: CourseId,
        incoming: CourseId,
    },
}

/// Errors surfaced while running the catalog pipeline end to end
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid course JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Index(#[from] IndexError),
}
