use anyhow::Result;

use crate::open_storage;

pub(crate) fn run(query: Option<String>) -> Result<()> {
    let storage = open_storage()?;

    let books = match query.as_deref().filter(|q| !q.is_empty()) {
        Some(term) => storage.search_books(term)?,
        None => storage.list_books()?,
    };

    println!("{}", serde_json::to_string_pretty(&books)?);
    Ok(())
}
