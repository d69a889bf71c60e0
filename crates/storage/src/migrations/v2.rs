use rusqlite::Connection;

use super::column_helpers::{ColumnEvolution, rename_or_copy_column};

pub(super) const NAME: &str = "rename_cover_image_url";

const TABLE: &str = "books";
const LEGACY_COLUMN: &str = "cover_image_url";
const COLUMN: &str = "cover_url";
const COLUMN_TYPE: &str = "TEXT";

pub(super) fn apply(conn: &Connection) -> Result<(), rusqlite::Error> {
    match rename_or_copy_column(conn, TABLE, LEGACY_COLUMN, COLUMN, COLUMN_TYPE)? {
        ColumnEvolution::AlreadyPresent => {
            tracing::debug!("{TABLE}.{COLUMN} already present");
        },
        ColumnEvolution::Renamed => {
            tracing::info!("Renamed {TABLE}.{LEGACY_COLUMN} to {COLUMN}");
        },
        ColumnEvolution::Copied { rows } => {
            tracing::info!(rows, "Copied {TABLE}.{LEGACY_COLUMN} into new column {COLUMN}");
        },
        ColumnEvolution::Added => {
            tracing::info!("Added missing column {TABLE}.{COLUMN}");
        },
    }
    Ok(())
}
