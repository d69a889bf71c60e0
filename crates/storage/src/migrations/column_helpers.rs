use rusqlite::Connection;

pub fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let sql = format!("PRAGMA table_info({})", table);
    let mut stmt = match conn.prepare(&sql) {
        Ok(s) => s,
        Err(_) => return false,
    };
    let rows = match stmt.query_map([], |row| row.get::<_, String>(1)) {
        Ok(r) => r,
        Err(_) => return false,
    };
    for name in rows.flatten() {
        if name == column {
            return true;
        }
    }
    false
}

pub fn add_column_if_not_exists(
    conn: &Connection,
    table: &str,
    column: &str,
    col_type: &str,
) -> Result<(), rusqlite::Error> {
    if !column_exists(conn, table, column) {
        let sql = format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, col_type);
        conn.execute(&sql, [])?;
    }
    Ok(())
}

pub fn rename_column(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
) -> Result<(), rusqlite::Error> {
    let sql = format!("ALTER TABLE {} RENAME COLUMN {} TO {}", table, from, to);
    conn.execute(&sql, [])?;
    Ok(())
}

/// Adds `to` and fills it from `from` in one transaction. `from` is kept.
///
/// Returns the number of rows copied.
pub fn add_and_copy_column(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
    col_type: &str,
) -> Result<usize, rusqlite::Error> {
    let tx = conn.unchecked_transaction()?;
    add_column_if_not_exists(&tx, table, to, col_type)?;
    let copied = tx.execute(&format!("UPDATE {} SET {} = {}", table, to, from), [])?;
    tx.commit()?;
    Ok(copied)
}

/// What `rename_or_copy_column` did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEvolution {
    /// The target column was already there; nothing ran.
    AlreadyPresent,
    /// The legacy column was renamed in place.
    Renamed,
    /// Rename failed; the target column was added and filled from the legacy one.
    Copied { rows: usize },
    /// Neither column existed; the target column was added empty.
    Added,
}

/// Moves data from a legacy column to its replacement.
///
/// Tries an in-place rename first and falls back to add-and-copy when the
/// rename is rejected. Does nothing when `to` already exists.
pub fn rename_or_copy_column(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
    col_type: &str,
) -> Result<ColumnEvolution, rusqlite::Error> {
    rename_or_copy_column_with(conn, table, from, to, col_type, rename_column)
}

pub fn rename_or_copy_column_with<R>(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
    col_type: &str,
    rename: R,
) -> Result<ColumnEvolution, rusqlite::Error>
where
    R: FnOnce(&Connection, &str, &str, &str) -> Result<(), rusqlite::Error>,
{
    if column_exists(conn, table, to) {
        return Ok(ColumnEvolution::AlreadyPresent);
    }
    if !column_exists(conn, table, from) {
        add_column_if_not_exists(conn, table, to, col_type)?;
        return Ok(ColumnEvolution::Added);
    }

    match rename(conn, table, from, to) {
        Ok(()) => Ok(ColumnEvolution::Renamed),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Renaming {table}.{from} failed, falling back to add-and-copy"
            );
            let rows = add_and_copy_column(conn, table, from, to, col_type)?;
            Ok(ColumnEvolution::Copied { rows })
        },
    }
}
