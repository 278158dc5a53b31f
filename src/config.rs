//! Configuration Module
//!
//! Holds the two tunables of a cache: the entry time-to-live and the sweep
//! interval. Values can be given explicitly or loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Defaults ==
/// Time-to-live applied to every new entry when none is configured.
pub const DEFAULT_ENTRY_EXPIRATION: Duration = Duration::from_secs(5 * 60);

/// Interval between background sweeps when none is configured.
pub const DEFAULT_EXPIRY_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Shortest sweep interval the sweeper will run with.
pub const MIN_EXPIRY_CHECK_INTERVAL: Duration = Duration::from_millis(1);

/// Environment variable holding the entry TTL in milliseconds.
pub const ENTRY_EXPIRATION_VAR: &str = "CACHE_ENTRY_EXPIRATION_MS";

/// Environment variable holding the sweep interval in milliseconds.
pub const EXPIRY_CHECK_INTERVAL_VAR: &str = "CACHE_EXPIRY_CHECK_INTERVAL_MS";

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied to every entry at the moment it is set
    pub entry_expiration: Duration,
    /// Period of the background sweeper
    pub expiry_check_interval: Duration,
}

impl CacheConfig {
    /// Creates a config, substituting the defaults for absent values.
    pub fn new(entry_expiration: Option<Duration>, expiry_check_interval: Option<Duration>) -> Self {
        Self {
            entry_expiration: entry_expiration.unwrap_or(DEFAULT_ENTRY_EXPIRATION),
            expiry_check_interval: expiry_check_interval.unwrap_or(DEFAULT_EXPIRY_CHECK_INTERVAL),
        }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ENTRY_EXPIRATION_MS` - Entry TTL in milliseconds (default: 300000)
    /// - `CACHE_EXPIRY_CHECK_INTERVAL_MS` - Sweep interval in milliseconds (default: 10000)
    ///
    /// Unset variables fall back to the defaults; a value that is set but is not
    /// a whole number yields [`CacheError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parse = |var: &'static str| -> Result<Option<Duration>> {
            match lookup(var) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(|ms| Some(Duration::from_millis(ms)))
                    .map_err(|_| CacheError::InvalidConfig { var, value: raw }),
            }
        };

        Ok(Self::new(
            parse(ENTRY_EXPIRATION_VAR)?,
            parse(EXPIRY_CHECK_INTERVAL_VAR)?,
        ))
    }

    /// Sweep interval actually used by the sweeper, never below
    /// [`MIN_EXPIRY_CHECK_INTERVAL`].
    pub fn effective_check_interval(&self) -> Duration {
        self.expiry_check_interval.max(MIN_EXPIRY_CHECK_INTERVAL)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            entry_expiration: DEFAULT_ENTRY_EXPIRATION,
            expiry_check_interval: DEFAULT_EXPIRY_CHECK_INTERVAL,
        }
    }
}
