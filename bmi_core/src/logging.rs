//! Logging setup for applications embedding bmi_core.
//!
//! The library itself only emits `tracing` events:
//! - `debug` for rejected inputs and per-row results
//! - `warn` for batch rows that failed
//! - `info` for the per-batch summary
//!
//! Installing a subscriber is left to the embedding program.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact subscriber filtered at INFO
pub fn init() {
    init_with_level("info")
}

/// Install a compact subscriber filtered at `default_level`.
///
/// RUST_LOG wins when set. Does nothing if a global subscriber is
/// already installed.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Route debug output through the test harness
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
