//! Error types for the cache
//!
//! Cache operations themselves are total; only configuration loading can fail.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A configuration variable was set but could not be parsed
    #[error("Invalid configuration: {var}={value:?} is not a whole number of milliseconds")]
    InvalidConfig {
        /// Name of the offending environment variable
        var: &'static str,
        /// The raw value that failed to parse
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
