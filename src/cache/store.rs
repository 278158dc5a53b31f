//! Cache Store Module
//!
//! Unsynchronised entry map with lazy and active TTL expiration. Locking is
//! the caller's concern; see [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key/value storage where every entry shares one TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL applied to every new entry
    entry_expiration: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `entry_expiration`.
    pub fn new(entry_expiration: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            entry_expiration,
        }
    }

    // == Set ==
    /// Stores a key-value pair, replacing any previous entry for the key.
    ///
    /// The TTL is measured from this call, whether or not the previous entry
    /// had already expired.
    pub fn set(&mut self, key: String, value: String) {
        let entry = CacheEntry::new(value, self.entry_expiration);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Missing and expired keys both yield `None`. Expired entries are left in
    /// place; removing them is [`CacheStore::cleanup_expired`]'s job.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value().to_string())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired-but-unswept ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
