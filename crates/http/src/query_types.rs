//! Request/query types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookQuery {
    pub title: String,
    pub author: String,
}
