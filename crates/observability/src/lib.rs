//! Shared tracing/logging setup.
//!
//! The workspace is a library; the embedding application calls [`init`]
//! once at startup. Library crates only emit through the `tracing` macros
//! and never install a subscriber themselves.

/// Tracing configuration (filters, formatting).
pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
