//! HTTP API server for bookverse.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
#[cfg(test)]
mod tests;

use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use bookverse_service::{BookService, Seeder};

pub use response_types::{VersionResponse, WelcomeResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Service for listing, searching, and creating books
    pub book_service: Arc<BookService>,
}

/// Runs the seeder once in the background.
///
/// A failed run is logged; the server keeps serving either way.
pub fn start_seeding(
    seeder: Arc<Seeder>,
    topic: String,
    count: u32,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(topic = %topic, count, "Startup seeding started");
        if let Err(e) = seeder.seed(&topic, count).await {
            tracing::warn!(error = %e, "Startup seeding failed");
        }
    })
}

/// CORS policy allowing the given frontend origins with credentials.
///
/// Origins that are not valid header values are logged and skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/books", get(handlers::books::list_books).post(handlers::books::create_book))
        .layer(cors)
        .with_state(state)
}

async fn root() -> (StatusCode, Json<WelcomeResponse>) {
    (StatusCode::OK, Json(WelcomeResponse { message: "Hello BookVerse!" }))
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
