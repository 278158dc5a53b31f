//! Sweep Demo
//!
//! Fills a short-lived cache, watches lazy expiration and the sweeper at work,
//! then closes the cache.
//!
//! Run with: `RUST_LOG=ttl_cache=debug cargo run --example sweep`
//! Durations can be overridden with `CACHE_ENTRY_EXPIRATION_MS` and
//! `CACHE_EXPIRY_CHECK_INTERVAL_MS`.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttl_cache::{Cache, CacheConfig};

#[tokio::main]
async fn main() -> ttl_cache::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=debug,sweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = CacheConfig::from_env()?;
    if std::env::var(ttl_cache::config::ENTRY_EXPIRATION_VAR).is_err() {
        config.entry_expiration = Duration::from_millis(500);
    }
    if std::env::var(ttl_cache::config::EXPIRY_CHECK_INTERVAL_VAR).is_err() {
        config.expiry_check_interval = Duration::from_secs(2);
    }
    info!(?config, "Configuration loaded");

    let cache = Cache::with_config(config);
    for i in 0..5 {
        cache.set(format!("key{i}"), format!("value{i}"));
    }
    info!(entries = cache.len(), value = ?cache.get("key0"), "Cache filled");

    tokio::time::sleep(config.entry_expiration + Duration::from_millis(50)).await;
    info!(entries = cache.len(), value = ?cache.get("key0"), "Entries expired, not yet swept");

    tokio::time::sleep(config.effective_check_interval() * 2).await;
    info!(entries = cache.len(), "After sweep");

    cache.close();
    Ok(())
}
