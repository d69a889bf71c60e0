//! Schema migration command.
//!
//! Opening storage runs the migration list; this prints the resulting report
//! and fails when any step did not apply.

use anyhow::Result;

use crate::open_storage;

pub(crate) fn run() -> Result<()> {
    let storage = open_storage()?;
    let report = storage.migration_report();

    println!("{}", serde_json::to_string_pretty(report)?);

    if !report.is_clean() {
        anyhow::bail!("{} migration step(s) failed", report.failed.len());
    }
    Ok(())
}
