//! Subscriber setup for embedding applications.
//!
//! The library only emits `tracing` events; it never installs a subscriber by
//! itself. Front ends call [`init_logging`] once at start-up.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins when set and valid, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already set, so calling this
/// more than once is harmless.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}
