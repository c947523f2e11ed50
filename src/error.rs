use thiserror::Error;

/// Errors surfaced by the grow archival engine.
#[derive(Debug, Error)]
pub enum GrowError {
    #[error("plant not found: {0}")]
    PlantNotFound(i64),
    #[error("plant is already archived: {0}")]
    PlantAlreadyArchived(i64),
    #[error("archived grow not found: {0}")]
    GrowNotFound(i64),
    #[error("no archived grows for tent: {0}")]
    TentHasNoArchives(String),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, GrowError>;

/// Coarse classification for transport layers (CLI exit codes today,
/// HTTP status codes for the web collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }
}

impl GrowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PlantNotFound(_) | Self::GrowNotFound(_) | Self::TentHasNoArchives(_) => {
                ErrorKind::NotFound
            }
            Self::PlantAlreadyArchived(_) => ErrorKind::Conflict,
            Self::Database(_) => ErrorKind::Internal,
        }
    }
}
