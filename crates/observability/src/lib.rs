//! Process-wide observability (tracing/logging) for the dashboard service.

/// Tracing configuration (filter, JSON formatting).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
