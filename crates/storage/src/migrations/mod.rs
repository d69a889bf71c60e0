#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;

#[cfg(test)]
pub(crate) use column_helpers::{ColumnEvolution, column_exists, rename_or_copy_column_with};

use rusqlite::Connection;
use serde::Serialize;

/// One schema change. `apply` must be safe to run against a schema it already produced.
pub(crate) struct Migration {
    pub name: &'static str,
    pub apply: fn(&Connection) -> Result<(), rusqlite::Error>,
}

pub(crate) const MIGRATIONS: &[Migration] = &[
    Migration { name: v1::NAME, apply: v1::apply },
    Migration { name: v2::NAME, apply: v2::apply },
];

pub const SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationFailure {
    pub step: &'static str,
    pub error: String,
}

/// Outcome of one pass over the migration list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub from_version: i32,
    pub to_version: i32,
    pub applied: Vec<&'static str>,
    pub failed: Vec<MigrationFailure>,
}

impl MigrationReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every migration the database has not recorded yet.
///
/// Failures are logged and collected in the report, never returned: a later
/// step still gets its chance, and `user_version` only advances past the
/// leading run of steps that succeeded, so failed steps are retried on the
/// next start.
pub(crate) fn run_migrations(conn: &Connection) -> MigrationReport {
    let current_version: i32 =
        match conn.pragma_query_value(None, "user_version", |row| row.get(0)) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read schema version, assuming 0");
                0
            },
        };

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    let mut report = MigrationReport {
        from_version: current_version,
        to_version: current_version,
        ..MigrationReport::default()
    };
    let mut contiguous = true;

    for (index, migration) in MIGRATIONS.iter().enumerate() {
        let version = index as i32 + 1;
        if version <= current_version {
            continue;
        }
        tracing::info!(step = migration.name, "Running migration v{}", version);
        match (migration.apply)(conn) {
            Ok(()) => {
                report.applied.push(migration.name);
                if contiguous {
                    report.to_version = version;
                }
            },
            Err(e) => {
                tracing::warn!(step = migration.name, error = %e, "Migration step failed");
                report.failed.push(MigrationFailure { step: migration.name, error: e.to_string() });
                contiguous = false;
            },
        }
    }

    if report.to_version != current_version {
        if let Err(e) = conn.pragma_update(None, "user_version", report.to_version) {
            tracing::warn!(error = %e, "Could not record schema version");
        }
    }

    if report.is_clean() {
        tracing::info!("Database schema up to date (version {})", report.to_version);
    } else {
        tracing::warn!(
            failed = report.failed.len(),
            "Database schema left at version {} after failed migrations",
            report.to_version
        );
    }

    report
}
