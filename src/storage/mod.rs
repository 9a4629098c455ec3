//! Storage module for persisting crawl data
//!
//! The crawler keeps exactly one kind of durable state: the set of addresses
//! it has already claimed. This module holds:
//! - SQLite database initialization and schema management
//! - The `VisitedStore` interface the crawl engine consumes
//! - A SQLite-backed implementation of it

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{StorageError, StorageResult, VisitedStore};

use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(StorageError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> StorageResult<SqliteStorage> {
    SqliteStorage::new(path)
}
