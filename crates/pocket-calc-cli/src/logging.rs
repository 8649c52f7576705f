//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries nothing but the display.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn log_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(verbosity: Verbosity) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
