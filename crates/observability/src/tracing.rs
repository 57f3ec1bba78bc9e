//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Axum/hyper internals are noisy
/// at info, keep them at warn.
const DEFAULT_FILTER: &str = "info,hyper=warn,tower=warn";

/// Initialize tracing/logging for the process.
///
/// JSON lines on stdout, level configurable via `RUST_LOG`. Safe to call
/// multiple times (subsequent calls are no-ops), which keeps per-test
/// initialization harmless.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
