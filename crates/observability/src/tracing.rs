//! Tracing/logging initialization.
//!
//! JSON lines on stdout, filtered by `RUST_LOG` when set. Rule rejections log at
//! `debug`, accepted mutations at `info`, so `RUST_LOG=fulfilment_warehouses=debug`
//! shows why an admission failed.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `default_filter` applies when `RUST_LOG` is unset or unparsable.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_current_span(true)
        .with_target(false)
        .try_init();
}
