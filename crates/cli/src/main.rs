mod commands;

use anyhow::Result;
use bookverse_core::env_config::{env_parse_with_default, env_string_with_default};
use bookverse_core::{
    DEFAULT_BOOKS_API_URL, DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_SEED_TIMEOUT_SECS,
};
use bookverse_metadata::BooksApiClient;
use bookverse_storage::Storage;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookverse")]
#[command(about = "Personal book catalog with cover enrichment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API, seeding the catalog once at startup
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Skip the startup seeding run
        #[arg(long)]
        no_seed: bool,
    },
    /// Fetch books about a topic from Google Books and store the new ones
    Seed {
        #[arg(short, long)]
        topic: Option<String>,
        #[arg(short, long)]
        count: Option<u32>,
    },
    /// Bring the database schema up to date and print what ran
    Migrate,
    /// Print stored books, optionally filtered by title or author
    Search { query: Option<String> },
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("BOOKVERSE_DB_PATH") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookverse")
        .join("books.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_storage() -> Result<Storage> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    tracing::info!(path = %db_path.display(), "Opening database");
    Ok(Storage::new(&db_path)?)
}

pub(crate) fn get_books_api_url() -> String {
    env_string_with_default("BOOKVERSE_BOOKS_API_URL", DEFAULT_BOOKS_API_URL)
}

pub(crate) fn books_client() -> Result<BooksApiClient> {
    let lookup_secs =
        env_parse_with_default("BOOKVERSE_LOOKUP_TIMEOUT_SECS", DEFAULT_LOOKUP_TIMEOUT_SECS);
    let batch_secs =
        env_parse_with_default("BOOKVERSE_SEED_TIMEOUT_SECS", DEFAULT_SEED_TIMEOUT_SECS);
    Ok(BooksApiClient::new(&get_books_api_url())?
        .with_lookup_timeout(Duration::from_secs(lookup_secs))
        .with_batch_timeout(Duration::from_secs(batch_secs)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, no_seed } => commands::serve::run(port, host, !no_seed).await,
        Commands::Seed { topic, count } => commands::seed::run(topic, count).await,
        Commands::Migrate => commands::migrate::run(),
        Commands::Search { query } => commands::search::run(query),
    }
}
