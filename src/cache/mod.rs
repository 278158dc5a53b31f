//! Cache Module
//!
//! Provides in-process caching with TTL expiration and periodic sweeping.

mod entry;
mod handle;
mod store;


use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;

/// A store shared between a [`Cache`] handle and its sweeper.
pub type SharedStore = Arc<RwLock<CacheStore>>;

// Entries are replaced wholesale, so a panic while a guard was held never
// leaves a half-written entry behind and the poison flag can be ignored.
pub(crate) fn read_store(store: &RwLock<CacheStore>) -> RwLockReadGuard<'_, CacheStore> {
    store.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_store(store: &RwLock<CacheStore>) -> RwLockWriteGuard<'_, CacheStore> {
    store.write().unwrap_or_else(PoisonError::into_inner)
}
