//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the VisitedStore trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{StorageResult, VisitedStore};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// Missing parent directories of `path` are created.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn new(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // journal_mode answers with the resulting mode, so it has to be read back
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch(
            "
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database
    ///
    /// Nothing survives the instance; useful for tests and dry runs.
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl VisitedStore for SqliteStorage {
    fn has(&self, address: &str) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM urls WHERE url = ?1",
                params![address],
                |row| row.get(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    fn mark(&mut self, address: &str) -> StorageResult<()> {
        self.mark_if_absent(address)?;
        Ok(())
    }

    fn mark_if_absent(&mut self, address: &str) -> StorageResult<bool> {
        let now = Utc::now().to_rfc3339();
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO urls (url, visited_at) VALUES (?1, ?2)",
            params![address, now],
        )?;

        Ok(inserted == 1)
    }

    fn visited_addresses(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT url FROM urls ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut addresses = Vec::new();
        for row in rows {
            addresses.push(row?);
        }

        Ok(addresses)
    }

    fn count_visited(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM urls", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
