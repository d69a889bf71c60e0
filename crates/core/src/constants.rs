//! Shared constants for bookverse.

/// Default base URL of the Google Books API.
pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1";

/// Timeout for a single cover lookup, in seconds.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Timeout for the seeding batch fetch, in seconds.
pub const DEFAULT_SEED_TIMEOUT_SECS: u64 = 10;

/// Topic used by the startup seeder.
pub const DEFAULT_SEED_TOPIC: &str = "science fiction";

/// Batch size used by the startup seeder.
pub const DEFAULT_SEED_COUNT: u32 = 20;

/// Upper bound the volumes endpoint accepts for `maxResults`.
pub const MAX_VOLUMES_PER_REQUEST: u32 = 40;

/// Title stored when the metadata API returns none.
pub const UNKNOWN_TITLE: &str = "No Title";

/// Author stored when the metadata API returns none.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// SQLite connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Frontend origin allowed by CORS when none is configured.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
