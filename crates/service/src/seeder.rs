use std::sync::Arc;

use bookverse_core::{NewBook, UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use bookverse_metadata::{BooksApiClient, VolumeInfo};
use bookverse_storage::BookStore;
use serde::Serialize;

use crate::ServiceError;

/// Counts from one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: usize,
}

/// Bulk-populates the catalog from a Google Books topic search.
pub struct Seeder {
    store: Arc<dyn BookStore>,
    client: Arc<BooksApiClient>,
}

impl Seeder {
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>, client: Arc<BooksApiClient>) -> Self {
        Self { store, client }
    }

    /// Fetches up to `count` books about `topic` and stores those whose title is new.
    ///
    /// Covers come from the same response, no extra lookups are made. A failed
    /// fetch is returned as an error before anything is stored; the inserts
    /// themselves are committed together.
    pub async fn seed(&self, topic: &str, count: u32) -> Result<SeedReport, ServiceError> {
        let volumes = self.client.fetch_batch(topic, count).await?;
        let books: Vec<NewBook> =
            volumes.iter().map(|v| volume_to_new_book(&v.volume_info)).collect();

        let inserted = self.store.insert_missing_by_title(&books).await?;
        let report = SeedReport {
            fetched: books.len(),
            inserted,
            skipped: books.len().saturating_sub(inserted),
        };
        tracing::info!(
            topic,
            fetched = report.fetched,
            inserted = report.inserted,
            skipped = report.skipped,
            "Seeding finished"
        );
        Ok(report)
    }
}

/// Maps one API volume to a book, substituting placeholders for missing title or authors.
#[must_use]
pub fn volume_to_new_book(info: &VolumeInfo) -> NewBook {
    // Kept verbatim: dedup compares exact titles.
    let title = info.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or(UNKNOWN_TITLE);

    let authors: Vec<&str> = info
        .authors
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    let author = if authors.is_empty() { UNKNOWN_AUTHOR.to_owned() } else { authors.join(", ") };

    NewBook::new(title, author).with_cover_url(info.cover_url())
}
