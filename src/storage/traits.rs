//! Storage traits and error types
//!
//! This module defines the trait interface for the visited-address store and
//! associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable set of addresses the crawler has already processed
///
/// An address is recorded once, before its page is fetched, and stays
/// recorded for the life of the store. Records are never removed.
pub trait VisitedStore {
    /// Returns true if the address has a visited record
    fn has(&self, address: &str) -> StorageResult<bool>;

    /// Records the address as visited
    ///
    /// Recording an address that is already present is a no-op.
    fn mark(&mut self, address: &str) -> StorageResult<()>;

    /// Records the address unless it is already present
    ///
    /// The existence check and the insert are one statement, so two callers
    /// racing on the same address cannot both win.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - This call created the record
    /// * `Ok(false)` - The address was already recorded
    fn mark_if_absent(&mut self, address: &str) -> StorageResult<bool>;

    /// Returns every recorded address in the order it was recorded
    fn visited_addresses(&self) -> StorageResult<Vec<String>>;

    /// Counts recorded addresses
    fn count_visited(&self) -> StorageResult<u64>;
}
