//! Cache Module
//!
//! Provides an in-memory byte cache with uniform TTL and periodic sweeping.

use std::time::Duration;

mod entry;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl_cache::TtlCache;

// == Public Constants ==
/// Sweep interval used when a cache is created with a zero TTL
pub const DEFAULT_REAP_INTERVAL: Duration = Duration::from_secs(5);
