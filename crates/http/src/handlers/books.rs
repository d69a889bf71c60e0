use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use bookverse_core::Book;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{BooksQuery, CreateBookQuery};

pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BooksQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.book_service.list_books(query.search.as_deref()).await?;
    Ok(Json(books))
}

pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreateBookQuery>,
) -> Result<Json<Book>, ApiError> {
    let book = state.book_service.create_book(&query.title, &query.author).await?;
    Ok(Json(book))
}
