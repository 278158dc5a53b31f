//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::cache::{write_store, SharedStore};

/// Handle to a running sweeper task.
///
/// The sweeper is stopped by [`Sweeper::stop`] or when the handle is dropped.
#[derive(Debug)]
pub struct Sweeper {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns a background task that sweeps `store` every `interval`.
    ///
    /// Each sweep holds the store's write lock for a full scan, so `get` and
    /// `set` calls wait until it completes.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    ///
    /// # Example
    /// ```ignore
    /// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(300))));
    /// let sweeper = Sweeper::start(store.clone(), Duration::from_secs(10));
    /// // Later, during shutdown:
    /// sweeper.stop();
    /// ```
    pub fn start(store: SharedStore, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(sweep_loop(store, interval, shutdown_rx));

        info!(interval_ms = interval.as_millis() as u64, "TTL sweeper started");

        Self { shutdown_tx, task }
    }

    /// Signals the sweeper to stop. Calling this more than once is a no-op.
    pub fn stop(&self) {
        // send_replace stores the flag even if the task already exited
        let was_stopped = self.shutdown_tx.send_replace(true);
        if !was_stopped {
            info!("TTL sweeper stopped");
        }
    }

    /// Returns true once [`Sweeper::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Returns true once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn sweep_loop(store: SharedStore, interval: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    debug!("TTL sweeper received shutdown signal");
                    return;
                }
            }
        }

        let (removed, remaining) = {
            let mut guard = write_store(&store);
            let removed = guard.cleanup_expired();
            (removed, guard.len())
        };

        if removed > 0 {
            debug!(removed, remaining, "TTL sweep removed expired entries");
        } else {
            trace!(remaining, "TTL sweep found no expired entries");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{read_store, CacheStore};
    use std::sync::{Arc, RwLock};

    fn shared_store(ttl: Duration) -> SharedStore {
        Arc::new(RwLock::new(CacheStore::new(ttl)))
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let store = shared_store(Duration::from_millis(10));
        write_store(&store).set("expire_soon".to_string(), "value".to_string());

        let sweeper = Sweeper::start(store.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(read_store(&store).is_empty(), "Expired entry should have been swept");

        sweeper.stop();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_valid_entries() {
        let store = shared_store(Duration::from_secs(3600));
        write_store(&store).set("long_lived".to_string(), "value".to_string());

        let sweeper = Sweeper::start(store.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(100)).await;

        let guard = read_store(&store);
        assert_eq!(guard.len(), 1, "Valid entry should not be removed");
        assert_eq!(guard.get("long_lived").as_deref(), Some("value"));
        drop(guard);

        sweeper.stop();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_stopped() {
        let store = shared_store(Duration::from_secs(1));
        let sweeper = Sweeper::start(store, Duration::from_secs(3600));

        assert!(!sweeper.is_stopped());
        sweeper.stop();
        sweeper.stop();
        assert!(sweeper.is_stopped());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(sweeper.is_finished(), "Task should exit after stop");
    }

    #[tokio::test]
    async fn test_stopped_sweeper_no_longer_sweeps() {
        let store = shared_store(Duration::from_millis(1));
        let sweeper = Sweeper::start(store.clone(), Duration::from_millis(10));
        sweeper.stop();
        tokio::time::sleep(Duration::from_millis(50)).await;

        write_store(&store).set("stale".to_string(), "value".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;

        let guard = read_store(&store);
        assert!(guard.get("stale").is_none());
        assert_eq!(guard.len(), 1, "Stopped sweeper must not remove entries");
    }

    #[tokio::test]
    async fn test_dropping_sweeper_stops_task() {
        let store = shared_store(Duration::from_secs(1));
        let sweeper = Sweeper::start(store.clone(), Duration::from_millis(10));
        drop(sweeper);

        tokio::time::sleep(Duration::from_millis(100)).await;

        // Only the test's handle remains once the task has exited
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
