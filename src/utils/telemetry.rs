//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the API binary.
//! `RUST_LOG` overrides the default `info` level.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the env filter, falling back to [`DEFAULT_LOG_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the global subscriber (compact, no target)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .try_init();
}
