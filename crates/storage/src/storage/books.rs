//! Book repository queries

use bookverse_core::{Book, NewBook};
use rusqlite::{OptionalExtension as _, params};

use crate::error::StorageError;
use crate::storage::{Storage, escape_like_pattern, log_row_error};

fn map_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book { id: row.get(0)?, title: row.get(1)?, author: row.get(2)?, cover_url: row.get(3)? })
}

fn insert_row(conn: &rusqlite::Connection, book: &NewBook) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO books (title, author, cover_url) VALUES (?1, ?2, ?3)",
        params![book.title, book.author, book.cover_url],
    )?;
    Ok(conn.last_insert_rowid())
}

impl Storage {
    /// Returns every stored book in id order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_books(&self) -> Result<Vec<Book>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, author, cover_url FROM books ORDER BY id")?;
            let books = stmt.query_map([], map_book)?.filter_map(log_row_error).collect();
            Ok(books)
        })
    }

    /// Returns books whose title or author contains `term`, ignoring case.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn search_books(&self, term: &str) -> Result<Vec<Book>, StorageError> {
        let pattern = format!("%{}%", escape_like_pattern(&term.to_lowercase()));
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, author, cover_url FROM books
                 WHERE unicode_lower(title) LIKE ?1 ESCAPE '\\'
                    OR unicode_lower(author) LIKE ?1 ESCAPE '\\'
                 ORDER BY id",
            )?;
            let books =
                stmt.query_map(params![pattern], map_book)?.filter_map(log_row_error).collect();
            Ok(books)
        })
    }

    /// Inserts one book and returns it with the assigned id.
    ///
    /// # Errors
    /// Returns error if the insert fails, e.g. when the schema lacks `cover_url`.
    pub fn insert_book(&self, book: &NewBook) -> Result<Book, StorageError> {
        let id = self.with_conn(|conn| insert_row(conn, book))?;
        Ok(book.clone().into_book(id))
    }

    /// Inserts every book whose exact title is not stored yet, in one transaction.
    ///
    /// Titles inserted earlier in the same call count as stored. Returns the
    /// number of rows inserted.
    ///
    /// # Errors
    /// Returns error if any statement fails; nothing from the batch is kept then.
    pub fn insert_missing_by_title(&self, books: &[NewBook]) -> Result<usize, StorageError> {
        self.with_transaction(|tx| {
            let mut exists = tx.prepare("SELECT 1 FROM books WHERE title = ?1 LIMIT 1")?;
            let mut inserted = 0usize;
            for book in books {
                let found: Option<i64> =
                    exists.query_row(params![book.title], |row| row.get(0)).optional()?;
                if found.is_some() {
                    tracing::debug!(title = %book.title, "Book already stored, skipping");
                    continue;
                }
                insert_row(tx, book)?;
                inserted += 1;
            }
            Ok(inserted)
        })
    }

    /// Counts stored books.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_books(&self) -> Result<usize, StorageError> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or_default())
        })
    }
}
