//! TTL Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! cache's TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

// == Reaper ==
/// Handle to a running reaper task.
///
/// Dropping the handle drops the stop sender, which also ends the task at its
/// next wake-up. [`Reaper::shutdown`] additionally waits for it to finish.
#[derive(Debug)]
pub struct Reaper {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Reaper {
    // == Shutdown ==
    /// Signals the task to stop and waits until it has exited.
    ///
    /// A sweep already holding the store lock runs to completion first.
    pub async fn shutdown(self) {
        let Reaper { stop, handle } = self;

        // Err means the task already exited and dropped its receiver
        let _ = stop.send(());

        if let Err(err) = handle.await {
            warn!("Reaper task did not exit cleanly: {}", err);
        }
    }

    /// Returns true once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that sweeps `store` every `interval`.
///
/// Each sweep removes entries whose age exceeds `interval`. The first sweep
/// runs one full interval after spawning. Must be called from within a tokio
/// runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(5));
/// // Later, during shutdown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(store: Arc<Mutex<CacheStore>>, interval: Duration) -> Reaper {
    let (stop, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut stop_rx => {
                    debug!("Cache reaper received stop signal");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.remove_older_than(interval)
                    };

                    if removed > 0 {
                        info!("Cache reap: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reap: no expired entries found");
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    });

    Reaper { stop, handle }
}
