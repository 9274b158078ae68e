//! Error types for storage operations

use std::fmt;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations
#[derive(Debug)]
pub enum StorageError {
    /// Database connection failed
    ConnectionFailed(String),

    /// Database query failed
    QueryFailed(String),

    /// Schema creation/verification failed
    SchemaFailed(String),

    /// The store has been marked unavailable (test fake)
    Unavailable,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionFailed(msg) => {
                write!(f, "failed to connect to storage: {}", msg)
            }
            StorageError::QueryFailed(msg) => write!(f, "storage query failed: {}", msg),
            StorageError::SchemaFailed(msg) => {
                write!(f, "failed to ensure storage schema: {}", msg)
            }
            StorageError::Unavailable => write!(f, "storage is unavailable"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(io_err) => StorageError::ConnectionFailed(io_err.to_string()),
            sqlx::Error::PoolTimedOut => {
                StorageError::ConnectionFailed("connection pool timed out".to_string())
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}
