//! TTL Cache Module
//!
//! Ties a [`CacheStore`] to its reaper task and owns the shutdown path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheStore, DEFAULT_REAP_INTERVAL};
use crate::tasks::{spawn_reaper, Reaper};

// == TTL Cache ==
/// In-memory byte cache whose entries are swept once they outlive the TTL.
///
/// Share it between callers with `Arc<TtlCache>`. Reads never refresh an
/// entry, and an entry may be returned for up to roughly two TTL intervals
/// after it was written, since expiry only happens on the reaper's sweep.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<Mutex<CacheStore>>,
    reaper: Mutex<Option<Reaper>>,
    ttl: Duration,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a cache and starts its reaper on the current tokio runtime.
    ///
    /// A zero `ttl` is replaced with [`DEFAULT_REAP_INTERVAL`].
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let ttl = if ttl.is_zero() {
            DEFAULT_REAP_INTERVAL
        } else {
            ttl
        };

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper(store.clone(), ttl);
        debug!("Cache created with ttl of {:?}", ttl);

        Self {
            store,
            reaper: Mutex::new(Some(reaper)),
            ttl,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its expiry clock.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut store = self.store.lock().await;
        store.insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the value stored under `key`, if the reaper has not removed it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Close ==
    /// Stops the reaper and waits for its task to exit.
    ///
    /// Stored entries are left in place and stay readable, but are never
    /// evicted afterwards. Calling `close` again does nothing.
    pub async fn close(&self) {
        // Held until the task has exited so `is_closed` never runs ahead of it
        let mut slot = self.reaper.lock().await;

        match slot.take() {
            Some(reaper) => {
                reaper.shutdown().await;
                info!("Cache closed");
            }
            None => debug!("Cache already closed"),
        }
    }

    /// Returns true once [`TtlCache::close`] has completed and the reaper
    /// task has exited.
    pub async fn is_closed(&self) -> bool {
        self.reaper.lock().await.is_none()
    }

    /// Returns the effective TTL, which is also the sweep interval.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}
