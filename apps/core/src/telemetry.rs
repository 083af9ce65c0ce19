//! Tracing initialization for binaries embedding the pipeline.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the outermost layer.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Installing a second
/// subscriber panics, so call this once from the binary entry point.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
