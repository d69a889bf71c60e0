use async_trait::async_trait;
use bookverse_core::{Book, NewBook};

use crate::error::StorageError;
use crate::storage::Storage;
use crate::traits::BookStore;

#[async_trait]
impl BookStore for Storage {
    async fn list_books(&self) -> Result<Vec<Book>, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.list_books()).await?
    }

    async fn search_books(&self, term: &str) -> Result<Vec<Book>, StorageError> {
        let storage = self.clone();
        let term = term.to_owned();
        tokio::task::spawn_blocking(move || storage.search_books(&term)).await?
    }

    async fn insert_book(&self, book: &NewBook) -> Result<Book, StorageError> {
        let storage = self.clone();
        let book = book.clone();
        tokio::task::spawn_blocking(move || storage.insert_book(&book)).await?
    }

    async fn insert_missing_by_title(&self, books: &[NewBook]) -> Result<usize, StorageError> {
        let storage = self.clone();
        let books = books.to_vec();
        tokio::task::spawn_blocking(move || storage.insert_missing_by_title(&books)).await?
    }
}
