use rusqlite::Connection;

pub(super) const NAME: &str = "create_books_table";

const SQL: &str = "
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    cover_url TEXT
);
";

pub(super) fn apply(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SQL)
}
