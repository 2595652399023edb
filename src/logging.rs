//! Tracing setup
//!
//! The catalog emits `debug` events for every registration and rebind, and
//! `trace` events for writes it silently ignores. Nothing is logged on
//! error; errors are returned to the caller.
//!
//! ```bash
//! RUST_LOG=bylines=debug cargo test -- --nocapture
//! ```

use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
