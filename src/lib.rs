//! TTL Cache - A lightweight in-process key/value cache
//!
//! String keys map to string values; every entry expires after a fixed
//! time-to-live and a background sweeper periodically purges stale entries.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::Cache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
