//! Test utilities and module declarations for storage tests.

use crate::Storage;
use bookverse_core::NewBook;
use tempfile::TempDir;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_book(title: &str, author: &str) -> NewBook {
    NewBook::new(title, author)
}

mod migration_tests;
