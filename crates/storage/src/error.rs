//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL failure, including constraint violations and missing columns.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running a query panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl StorageError {
    /// Whether the database was busy or locked by another writer.
    pub fn is_busy(&self) -> bool {
        let Self::Database(rusqlite::Error::SqliteFailure(err, _)) = self else {
            return false;
        };
        matches!(err.code, rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
