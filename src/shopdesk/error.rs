use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopdeskError>;

#[derive(Error, Debug)]
pub enum ShopdeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend failure (unreadable/unwritable store). Surfaced as a
    /// generic failure; the in-memory state stays valid.
    #[error("Store error: {0}")]
    Store(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Every violated field is reported, not just the first.
    #[error("Validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Import error: {0}")]
    Import(String),

    /// Bad caller-supplied input that never reaches validation (unknown
    /// status names, unknown settings sections).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShopdeskError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }
}
