use anyhow::Result;
use bookverse_core::env_config::{env_parse_with_default, env_string_with_default};
use bookverse_core::{DEFAULT_SEED_COUNT, DEFAULT_SEED_TOPIC};
use bookverse_service::Seeder;
use std::sync::Arc;

use crate::{books_client, open_storage};

pub(crate) fn default_topic() -> String {
    env_string_with_default("BOOKVERSE_SEED_TOPIC", DEFAULT_SEED_TOPIC)
}

pub(crate) fn default_count() -> u32 {
    env_parse_with_default("BOOKVERSE_SEED_COUNT", DEFAULT_SEED_COUNT)
}

pub(crate) async fn run(topic: Option<String>, count: Option<u32>) -> Result<()> {
    let storage = open_storage()?;
    let seeder = Seeder::new(Arc::new(storage), Arc::new(books_client()?));

    let topic = topic.unwrap_or_else(default_topic);
    let count = count.unwrap_or_else(default_count);
    let report = seeder.seed(&topic, count).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
