//! Storage backend trait abstraction
//!
//! Async interface over the book repository, enabling fakes in service and
//! HTTP tests.

use async_trait::async_trait;
use bookverse_core::{Book, NewBook};

use crate::error::StorageError;

/// Book repository operations.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Get every stored book.
    async fn list_books(&self) -> Result<Vec<Book>, StorageError>;

    /// Get books whose title or author contains `term`, case-insensitively.
    async fn search_books(&self, term: &str) -> Result<Vec<Book>, StorageError>;

    /// Insert one book. Returns it with the storage-assigned id.
    async fn insert_book(&self, book: &NewBook) -> Result<Book, StorageError>;

    /// Insert books whose title is not stored yet, committing once. Returns the inserted count.
    async fn insert_missing_by_title(&self, books: &[NewBook]) -> Result<usize, StorageError>;
}
