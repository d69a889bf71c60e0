use async_trait::async_trait;

/// Best-effort cover image lookup for a single book.
///
/// Implementations never fail: every problem is reported as `None`.
#[async_trait]
pub trait CoverLookup: Send + Sync {
    async fn lookup_cover(&self, title: &str, author: &str) -> Option<String>;
}
