//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value and the instant after which it is no longer valid.
///
/// Entries are never mutated; a later `set` on the same key replaces the
/// entry wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    value: String,
    /// `None` only when `now + ttl` is not representable, i.e. never expires
    expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    /// The stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Instant after which the entry is expired, if any.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is strictly after its
    /// expiration instant. Both the lazy check on `get` and the sweeper use
    /// this predicate.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining TTL, `Duration::ZERO` once the entry has expired,
    /// or `None` if the entry never expires.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}
