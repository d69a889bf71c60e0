//! Storage layer for bookverse
//!
//! SQLite-based book storage behind an r2d2 connection pool, with an
//! ordered list of idempotent schema migrations run on open.

mod backend;
pub mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::{MigrationFailure, MigrationReport, SCHEMA_VERSION};
pub use storage::Storage;
pub use traits::BookStore;
