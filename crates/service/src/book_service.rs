use std::sync::Arc;

use bookverse_core::{Book, NewBook};
use bookverse_metadata::CoverLookup;
use bookverse_storage::BookStore;

use crate::ServiceError;

pub struct BookService {
    store: Arc<dyn BookStore>,
    covers: Arc<dyn CoverLookup>,
}

impl BookService {
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>, covers: Arc<dyn CoverLookup>) -> Self {
        Self { store, covers }
    }

    /// Lists every book, or only those matching `search` when it is not empty.
    ///
    /// The term is matched as given, surrounding whitespace included.
    pub async fn list_books(&self, search: Option<&str>) -> Result<Vec<Book>, ServiceError> {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => Ok(self.store.search_books(term).await?),
            None => Ok(self.store.list_books().await?),
        }
    }

    /// Looks up a cover, then stores the book. A failed lookup stores no cover.
    pub async fn create_book(&self, title: &str, author: &str) -> Result<Book, ServiceError> {
        let title = title.trim();
        let author = author.trim();
        if title.is_empty() {
            return Err(ServiceError::InvalidInput("title must not be empty".to_owned()));
        }
        if author.is_empty() {
            return Err(ServiceError::InvalidInput("author must not be empty".to_owned()));
        }

        let cover_url = self.covers.lookup_cover(title, author).await;
        let book = NewBook::new(title, author).with_cover_url(cover_url);
        let created = self.store.insert_book(&book).await?;
        tracing::info!(
            id = created.id,
            title = %created.title,
            has_cover = created.cover_url.is_some(),
            "Book created"
        );
        Ok(created)
    }
}
