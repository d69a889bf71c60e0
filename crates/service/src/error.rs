//! Typed error enum for the service layer.

use bookverse_metadata::MetadataError;
use bookverse_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and metadata failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (pool, SQL, blocking task).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Metadata API call failed. Only seeding surfaces these.
    #[error("metadata: {0}")]
    Metadata(#[from] MetadataError),

    /// Caller provided invalid input (blank title or author).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the database was busy and the call may succeed later.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_busy())
    }
}
