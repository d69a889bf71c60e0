use serde::{Deserialize, Serialize};

/// A stored book. `id` is assigned by storage on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
}

/// A book that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into(), cover_url: None }
    }

    #[must_use]
    pub fn with_cover_url(mut self, cover_url: Option<String>) -> Self {
        self.cover_url = cover_url;
        self
    }

    /// Attaches the storage-assigned id.
    #[must_use]
    pub fn into_book(self, id: i64) -> Book {
        Book { id, title: self.title, author: self.author, cover_url: self.cover_url }
    }
}
