use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use bookverse_metadata::CoverLookup;
use bookverse_service::BookService;
use bookverse_storage::Storage;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;

use crate::{AppState, cors_layer, create_router};

struct NoCover;

#[async_trait]
impl CoverLookup for NoCover {
    async fn lookup_cover(&self, _title: &str, _author: &str) -> Option<String> {
        None
    }
}

struct FixedCover(&'static str);

#[async_trait]
impl CoverLookup for FixedCover {
    async fn lookup_cover(&self, _title: &str, _author: &str) -> Option<String> {
        Some(self.0.to_owned())
    }
}

fn test_router(covers: Arc<dyn CoverLookup>) -> (Router, Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("http.db")).unwrap();
    let state = Arc::new(AppState {
        book_service: Arc::new(BookService::new(Arc::new(storage.clone()), covers)),
    });
    let router = create_router(state, cors_layer(&["http://localhost:5173".to_owned()]));
    (router, storage, temp_dir)
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_root_returns_welcome() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));

    let (status, body) = send(&router, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello BookVerse!"}));
}

#[tokio::test]
async fn test_create_book_without_cover() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));

    let (status, first) = send(&router, Method::POST, "/books?title=Dune&author=Frank%20Herbert").await;
    assert_eq!(status, StatusCode::OK);
    let (status, created) = send(&router, Method::POST, "/books?title=Foo&author=Bar").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(created["title"], "Foo");
    assert_eq!(created["author"], "Bar");
    assert_eq!(created["cover_url"], Value::Null);
    assert!(created["id"].is_i64());
    assert_ne!(created["id"], first["id"]);
}

#[tokio::test]
async fn test_create_book_with_cover() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(FixedCover("https://x/y.png")));

    let (status, created) = send(&router, Method::POST, "/books?title=Dune&author=Frank+Herbert").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["author"], "Frank Herbert");
    assert_eq!(created["cover_url"], "https://x/y.png");
}

#[tokio::test]
async fn test_create_book_missing_param_is_bad_request() {
    let (router, storage, _temp_dir) = test_router(Arc::new(NoCover));

    let (status, _) = send(&router, Method::POST, "/books?title=Dune").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(storage.count_books().unwrap(), 0);
}

#[tokio::test]
async fn test_create_book_blank_title_is_bad_request() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));

    let (status, body) = send(&router, Method::POST, "/books?title=%20&author=Bar").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "title must not be empty"}));
}

#[tokio::test]
async fn test_list_and_search_books() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));
    send(&router, Method::POST, "/books?title=Dune&author=Frank%20Herbert").await;
    send(&router, Method::POST, "/books?title=Neuromancer&author=William%20Gibson").await;

    let (status, all) = send(&router, Method::GET, "/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, empty_term) = send(&router, Method::GET, "/books?search=").await;
    assert_eq!(empty_term.as_array().unwrap().len(), 2);

    let (_, found) = send(&router, Method::GET, "/books?search=dun").await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Dune");

    let (_, by_author) = send(&router, Method::GET, "/books?search=gibson").await;
    assert_eq!(by_author[0]["title"], "Neuromancer");

    let (_, none) = send(&router, Method::GET, "/books?search=xyz").await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (router, storage, _temp_dir) = test_router(Arc::new(NoCover));
    storage.with_conn(|conn| conn.execute_batch("ALTER TABLE books DROP COLUMN cover_url")).unwrap();

    let (status, body) = send(&router, Method::POST, "/books?title=Foo&author=Bar").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/books")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let (router, _storage, _temp_dir) = test_router(Arc::new(NoCover));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/books")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
