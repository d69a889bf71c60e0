use std::time::Duration;

use async_trait::async_trait;
use bookverse_core::{
    DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_SEED_TIMEOUT_SECS, MAX_VOLUMES_PER_REQUEST,
};

use crate::api_types::{Volume, VolumesResponse};
use crate::error::MetadataError;
use crate::lookup::CoverLookup;

/// Client for the Google Books `volumes` endpoint.
#[derive(Debug, Clone)]
pub struct BooksApiClient {
    client: reqwest::Client,
    base_url: String,
    lookup_timeout: Duration,
    batch_timeout: Duration,
}

impl BooksApiClient {
    /// Creates a client for the API rooted at `base_url`,
    /// e.g. `https://www.googleapis.com/books/v1`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MetadataError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            batch_timeout: Duration::from_secs(DEFAULT_SEED_TIMEOUT_SECS),
        })
    }

    /// Sets the timeout of single-book cover lookups.
    #[must_use]
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Sets the timeout of batch fetches used for seeding.
    #[must_use]
    pub fn with_batch_timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = timeout;
        self
    }

    /// Runs a free-text volume search.
    ///
    /// # Errors
    /// Returns an error if the request fails or times out, the API returns a
    /// non-success status, or the body is not a volumes response.
    pub async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
        timeout: Duration,
    ) -> Result<Vec<Volume>, MetadataError> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .query(&[("q", query), ("maxResults", max_results.as_str())])
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MetadataError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 200).to_owned(),
            });
        }

        let parsed: VolumesResponse =
            serde_json::from_str(&body).map_err(|e| MetadataError::JsonParse {
                context: format!("volumes response (body: {})", truncate(&body, 200)),
                source: e,
            })?;
        Ok(parsed.items)
    }

    /// Fetches up to `count` volumes about `topic` for seeding.
    ///
    /// `count` is capped at the API maximum per request; zero skips the request.
    ///
    /// # Errors
    /// Same as [`BooksApiClient::search_volumes`].
    pub async fn fetch_batch(&self, topic: &str, count: u32) -> Result<Vec<Volume>, MetadataError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let count = count.min(MAX_VOLUMES_PER_REQUEST);
        let mut volumes = self.search_volumes(topic, count, self.batch_timeout).await?;
        volumes.truncate(count as usize);
        Ok(volumes)
    }
}

#[async_trait]
impl CoverLookup for BooksApiClient {
    async fn lookup_cover(&self, title: &str, author: &str) -> Option<String> {
        let query = format!("{} {}", title.trim(), author.trim());
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match self.search_volumes(query, 1, self.lookup_timeout).await {
            Ok(volumes) => {
                let cover = volumes.first().and_then(|v| v.volume_info.cover_url());
                if cover.is_none() {
                    tracing::debug!(title, author, "No cover found");
                }
                cover
            },
            Err(e) => {
                tracing::debug!(
                    title,
                    author,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Cover lookup failed"
                );
                None
            },
        }
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
