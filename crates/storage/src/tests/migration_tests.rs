use rusqlite::Connection;
use tempfile::TempDir;

use crate::Storage;
use crate::migrations::{
    ColumnEvolution, SCHEMA_VERSION, column_exists, rename_or_copy_column_with, run_migrations,
};

const LEGACY_SCHEMA: &str = "
CREATE TABLE books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    cover_image_url TEXT
);
INSERT INTO books (title, author, cover_image_url) VALUES ('Dune', 'Frank Herbert', 'https://x/dune.png');
INSERT INTO books (title, author, cover_image_url) VALUES ('Ubik', 'Philip K. Dick', NULL);
";

fn legacy_db(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("legacy.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(LEGACY_SCHEMA).unwrap();
    path
}

fn user_version(conn: &Connection) -> i32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap()
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(books)").unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1)).unwrap().map(Result::unwrap).collect()
}

#[test]
fn test_fresh_database_gets_full_schema() {
    let conn = Connection::open_in_memory().unwrap();

    let report = run_migrations(&conn);

    assert!(report.is_clean());
    assert_eq!(report.applied, vec!["create_books_table", "rename_cover_image_url"]);
    assert_eq!(report.to_version, SCHEMA_VERSION);
    assert_eq!(column_names(&conn), vec!["id", "title", "author", "cover_url"]);
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
}

#[test]
fn test_second_run_is_noop() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn);

    let report = run_migrations(&conn);

    assert!(report.is_clean());
    assert!(report.applied.is_empty());
    assert_eq!(report.from_version, SCHEMA_VERSION);
    assert_eq!(column_names(&conn), vec!["id", "title", "author", "cover_url"]);
}

#[test]
fn test_steps_are_idempotent_without_version_tracking() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn);
    conn.pragma_update(None, "user_version", 0).unwrap();

    let report = run_migrations(&conn);

    assert!(report.is_clean());
    assert_eq!(report.applied.len(), 2);
    assert_eq!(column_names(&conn), vec!["id", "title", "author", "cover_url"]);
}

#[test]
fn test_legacy_column_is_renamed_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = legacy_db(&temp_dir);

    let storage = Storage::new(&path).unwrap();

    assert!(storage.migration_report().is_clean());
    let books = storage.list_books().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].cover_url.as_deref(), Some("https://x/dune.png"));
    assert_eq!(books[1].cover_url, None);

    let conn = Connection::open(&path).unwrap();
    assert!(column_exists(&conn, "books", "cover_url"));
    assert!(!column_exists(&conn, "books", "cover_image_url"));
}

#[test]
fn test_reopening_migrated_legacy_database_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = legacy_db(&temp_dir);
    drop(Storage::new(&path).unwrap());

    let storage = Storage::new(&path).unwrap();

    assert!(storage.migration_report().applied.is_empty());
    assert_eq!(storage.list_books().unwrap().len(), 2);
}

#[test]
fn test_rejected_rename_falls_back_to_add_and_copy() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(LEGACY_SCHEMA).unwrap();

    let outcome = rename_or_copy_column_with(
        &conn,
        "books",
        "cover_image_url",
        "cover_url",
        "TEXT",
        |_, _, _, _| Err(rusqlite::Error::InvalidQuery),
    )
    .unwrap();

    assert_eq!(outcome, ColumnEvolution::Copied { rows: 2 });
    assert_eq!(column_names(&conn), vec!["id", "title", "author", "cover_image_url", "cover_url"]);
    let copied: Vec<Option<String>> = conn
        .prepare("SELECT cover_url FROM books ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(copied, vec![Some("https://x/dune.png".to_owned()), None]);
}

#[test]
fn test_evolution_skipped_when_new_column_present() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn);

    let outcome = rename_or_copy_column_with(
        &conn,
        "books",
        "cover_image_url",
        "cover_url",
        "TEXT",
        |_, _, _, _| panic!("rename must not run"),
    )
    .unwrap();

    assert_eq!(outcome, ColumnEvolution::AlreadyPresent);
}

#[test]
fn test_missing_column_is_added_empty() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE books (id INTEGER PRIMARY KEY, title TEXT, author TEXT)")
        .unwrap();

    let report = run_migrations(&conn);

    assert!(report.is_clean());
    assert!(column_exists(&conn, "books", "cover_url"));
}

#[test]
fn test_failed_step_is_reported_not_raised() {
    let conn = Connection::open_in_memory().unwrap();
    // CREATE TABLE IF NOT EXISTS accepts the view; ALTER TABLE on it does not.
    conn.execute_batch("CREATE VIEW books AS SELECT 1 AS id").unwrap();

    let report = run_migrations(&conn);

    assert!(!report.is_clean());
    assert_eq!(report.applied, vec!["create_books_table"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].step, "rename_cover_image_url");
    assert_eq!(report.to_version, 1);
    assert_eq!(user_version(&conn), 1);

    let retry = run_migrations(&conn);
    assert_eq!(retry.from_version, 1);
    assert!(retry.applied.is_empty());
    assert_eq!(retry.failed.len(), 1);
}
