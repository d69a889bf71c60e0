use anyhow::Result;
use bookverse_core::DEFAULT_CORS_ORIGIN;
use bookverse_core::env_config::env_list_with_default;
use bookverse_http::{AppState, cors_layer, create_router, start_seeding};
use bookverse_service::{BookService, Seeder};
use std::sync::Arc;

use crate::commands::seed::{default_count, default_topic};
use crate::{books_client, open_storage};

pub(crate) async fn run(port: u16, host: String, seed: bool) -> Result<()> {
    let storage = Arc::new(open_storage()?);
    let client = Arc::new(books_client()?);

    if seed {
        let seeder = Arc::new(Seeder::new(storage.clone(), client.clone()));
        start_seeding(seeder, default_topic(), default_count());
    } else {
        tracing::info!("Startup seeding disabled");
    }

    let book_service = Arc::new(BookService::new(storage, client));
    let state = Arc::new(AppState { book_service });

    let origins = env_list_with_default("BOOKVERSE_CORS_ORIGINS", &[DEFAULT_CORS_ORIGIN]);
    let router = create_router(state, cors_layer(&origins));

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
