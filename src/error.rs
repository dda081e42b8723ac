use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocworkError {
    #[error("location '{0}' already exists")]
    AlreadyExists(String),

    #[error("unknown location '{0}'")]
    NotFound(String),

    #[error("location '{0}' is not in the registry; add it with `locwork location add`")]
    UnknownLocation(String),

    #[error("record store {} is corrupt: {detail}", path.display())]
    CorruptStore { path: PathBuf, detail: String },

    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

impl LocworkError {
    /// Whether a failed load may be degraded to an empty store instead of
    /// aborting the command. Only parse-level corruption qualifies; real IO
    /// failures stay fatal.
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, LocworkError::CorruptStore { .. })
    }
}

pub type Result<T> = std::result::Result<T, LocworkError>;
