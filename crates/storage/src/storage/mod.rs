//! `SQLite` storage implementation
//!
//! All methods are synchronous; async callers go through the `BookStore` impl.

mod books;

use bookverse_core::DEFAULT_DB_POOL_SIZE;
use bookverse_core::env_config::env_parse_with_default;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::sync::Arc;

use crate::error::StorageError;
use crate::migrations::{self, MigrationReport};

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pool: Pool<SqliteConnectionManager>,
    migration_report: Arc<MigrationReport>,
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Escape special characters for LIKE pattern matching
pub(crate) fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Concurrency settings and SQL helpers applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    // Built-in lower() and LIKE only fold ASCII.
    conn.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("BOOKVERSE_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Opens the database at `db_path` and brings its schema up to date.
    ///
    /// Migration failures are logged and recorded in [`Storage::migration_report`];
    /// only a database that cannot be opened at all is an error.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::with_pool_size(db_path, db_pool_size())
    }

    pub fn with_pool_size(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        let report = migrations::run_migrations(&conn);
        drop(conn);

        tracing::info!(pool_size = pool_size, "Storage initialized with connection pool");

        Ok(Self { pool, migration_report: Arc::new(report) })
    }

    /// Result of the migration pass run when this storage was opened.
    pub fn migration_report(&self) -> &MigrationReport {
        &self.migration_report
    }

    /// Runs `f` on a pooled connection.
    ///
    /// The connection goes back to the pool when this returns, on every path.
    pub fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn: PooledConn = self.pool.get()?;
        Ok(f(&conn)?)
    }

    /// Runs `f` inside a transaction that is committed once, after `f` succeeds.
    ///
    /// Any error rolls the whole transaction back.
    pub fn with_transaction<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    {
        let mut conn: PooledConn = self.pool.get()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
