use crate::model::StorageError;
use rusqlite::{Connection, params};

/// Append-only search log. One row per request, written before the
/// catalog is consulted.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database and ensures the schema exists.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS searches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                query TEXT NOT NULL,
                searched_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(Self { conn })
    }

    /// Appends one query to the log with the current timestamp.
    pub fn log_search(&self, query: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO searches (query, searched_at) VALUES (?1, datetime('now'))",
            params![query],
        )?;
        Ok(())
    }

    /// Total number of logged searches.
    pub fn search_count(&self) -> Result<i64, StorageError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM searches", [], |row| row.get(0))?;
        Ok(count)
    }
}
