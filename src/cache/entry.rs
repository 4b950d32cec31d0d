//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached payload and the moment it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw payload, never interpreted by the cache
    pub value: Vec<u8>,
    /// Time of the most recent add for this key
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago this entry was written.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Older Than ==
    /// Checks whether the entry's age exceeds `max_age`.
    ///
    /// An entry whose age equals `max_age` exactly is still considered live.
    pub fn is_older_than(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}
