//! Cache Handle Module
//!
//! The public cache type: a shared store plus the sweeper that keeps it clean.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::debug;

use crate::cache::{read_store, write_store, CacheStore, SharedStore};
use crate::config::CacheConfig;
use crate::tasks::Sweeper;

// == Cache ==
/// A thread-safe string cache whose entries expire after a fixed TTL.
///
/// Reads share the lock; writes and sweeps take it exclusively. The handle is
/// deliberately not `Clone`: wrap it in an `Arc` to share it between tasks or
/// threads. Dropping the handle stops its sweeper.
#[derive(Debug)]
pub struct Cache {
    store: SharedStore,
    config: CacheConfig,
    sweeper: Sweeper,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache and starts its background sweeper.
    ///
    /// Absent durations fall back to
    /// [`DEFAULT_ENTRY_EXPIRATION`](crate::config::DEFAULT_ENTRY_EXPIRATION) and
    /// [`DEFAULT_EXPIRY_CHECK_INTERVAL`](crate::config::DEFAULT_EXPIRY_CHECK_INTERVAL).
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn new(entry_expiration: Option<Duration>, expiry_check_interval: Option<Duration>) -> Self {
        Self::with_config(CacheConfig::new(entry_expiration, expiry_check_interval))
    }

    /// Creates a cache from an explicit configuration.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn with_config(config: CacheConfig) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(config.entry_expiration)));
        let sweeper = Sweeper::start(store.clone(), config.effective_check_interval());

        debug!(
            entry_expiration_ms = config.entry_expiration.as_millis() as u64,
            expiry_check_interval_ms = config.expiry_check_interval.as_millis() as u64,
            "Cache created"
        );

        Self {
            store,
            config,
            sweeper,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The entry expires `entry_expiration` after this call.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        write_store(&self.store).set(key, value);
    }

    // == Get ==
    /// Returns the value for `key`, or `None` if it is missing or expired.
    ///
    /// An expired entry stays in memory until the next sweep.
    pub fn get(&self, key: &str) -> Option<String> {
        read_store(&self.store).get(key)
    }

    /// Number of entries currently held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        read_store(&self.store).len()
    }

    /// Returns true if no entries are held.
    pub fn is_empty(&self) -> bool {
        read_store(&self.store).is_empty()
    }

    /// The resolved configuration of this cache.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Close ==
    /// Stops the background sweeper.
    ///
    /// `get` and `set` keep working afterwards, but expired entries are no
    /// longer removed. Closing twice is a no-op.
    pub fn close(&self) {
        self.sweeper.stop();
    }

    /// Returns true once [`Cache::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.sweeper.is_stopped()
    }
}
