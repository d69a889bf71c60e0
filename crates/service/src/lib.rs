//! Service layer for bookverse
//!
//! Centralizes business logic between HTTP/CLI handlers and storage/metadata.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod book_service;
mod error;
mod seeder;

pub use book_service::BookService;
pub use error::ServiceError;
pub use seeder::{SeedReport, Seeder, volume_to_new_book};
