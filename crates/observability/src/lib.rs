//! Tracing/logging setup shared by hosts embedding the audit base.

/// Initialize process-wide tracing with the default `info` directive.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Initialize with an explicit fallback directive (used when `RUST_LOG` is unset).
pub fn init_with_filter(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
