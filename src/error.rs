//! Error types for radix_db

use thiserror::Error;

/// Result type alias for radix_db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in radix_db operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {id} references unknown parent {parent_id}")]
    UnknownParent { id: u64, parent_id: u64 },

    #[error("Corruption detected: {0}")]
    Corruption(String),

    #[error("Invalid record file: {0}")]
    InvalidFile(String),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
}
