//! Database schema definitions
//!
//! One row per visited address. The primary key on `url` is what makes
//! `INSERT OR IGNORE` usable as an atomic check-and-mark.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Every address the crawler has claimed for fetching
CREATE TABLE IF NOT EXISTS urls (
    url TEXT PRIMARY KEY,
    visited_at TEXT NOT NULL
);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
