//! Concurrency gate bounding simultaneous fetches
//!
//! A counting semaphore with a fixed number of slots. The gate is built by
//! whoever owns the crawl and handed to the fetcher, so independent crawls
//! never share slots.

use std::sync::Arc;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// Default number of fetches allowed in flight at once
pub const DEFAULT_GATE_CAPACITY: usize = 10;

/// Admission control for network fetches
///
/// Cloning the gate shares the same slots.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// A held slot; dropping it frees the slot
pub type GatePermit = OwnedSemaphorePermit;

impl ConcurrencyGate {
    /// Creates a gate with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits for a free slot
    ///
    /// The slot is released when the returned permit is dropped, whichever
    /// way the holder exits.
    pub async fn acquire(&self) -> Result<GatePermit, AcquireError> {
        self.semaphore.clone().acquire_owned().await
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently held
    pub fn in_flight(&self) -> usize {
        self.capacity - self.semaphore.available_permits()
    }
}

impl Default for ConcurrencyGate {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_CAPACITY)
    }
}
