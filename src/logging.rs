//! Subscriber bootstrap for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` (e.g. `"harvest_with_ease=debug"`).
/// Fails if a global subscriber is already set.
pub fn try_init(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
