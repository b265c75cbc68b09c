//! Error types for Dreamlog core operations.
//!
//! Every store and transfer failure is returned to the caller as a
//! `DreamError`; nothing is swallowed inside the core. The CLI layer maps
//! these to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Dreamlog operations.
pub type Result<T> = std::result::Result<T, DreamError>;

/// Core error type for Dreamlog operations.
#[derive(Debug, Error)]
pub enum DreamError {
    /// The local database could not be opened or provisioned
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A generated identifier collided with an existing record
    #[error("Write conflict: dream {0} already exists")]
    WriteConflict(String),

    /// Import content is not a JSON array of dream records
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// Resource not found (strict lookups only; `update` upserts instead)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for DreamError {
    fn from(err: std::io::Error) -> Self {
        DreamError::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for DreamError {
    fn from(err: rusqlite::Error) -> Self {
        DreamError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<serde_json::Error> for DreamError {
    fn from(err: serde_json::Error) -> Self {
        DreamError::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DreamError {
    fn from(err: tokio::task::JoinError) -> Self {
        DreamError::Storage(format!("Storage task failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_io() {
        let err: DreamError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, DreamError::Io(ref msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_display_names_conflicting_id() {
        let err = DreamError::WriteConflict("abc".to_string());
        assert_eq!(err.to_string(), "Write conflict: dream abc already exists");
    }
}
