//! Error types for questchat.

use thiserror::Error;

/// Errors produced by questchat.
#[derive(Debug, Error)]
pub enum QuestError {
    /// Configuration could not be resolved, read, or written.
    #[error("config error: {0}")]
    Config(String),

    /// The local database failed.
    #[error("database error: {0}")]
    Database(String),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or terminal I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A user-supplied argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal UI could not be driven.
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl From<rusqlite::Error> for QuestError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuestError::InvalidArgument("bad duration".to_string());
        assert_eq!(err.to_string(), "invalid argument: bad duration");
    }

    #[test]
    fn test_from_rusqlite() {
        let err: QuestError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, QuestError::Database(_)));
    }
}
