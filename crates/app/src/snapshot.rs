//! The application-state snapshot returned by every operation.

use serde::Serialize;

use larder_ledger::{InventoryEntry, filter_entries};
use larder_session::SessionState;

/// Immutable view of the application state after one operation.
///
/// Operations return a fresh snapshot instead of mutating shared state, so
/// a snapshot already in the caller's hands never changes under it (it only
/// goes stale). Entries are sorted by name for stable display; the store
/// itself guarantees no order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    pub session: Option<SessionState>,
    pub entries: Vec<InventoryEntry>,
}

impl AppSnapshot {
    pub(crate) fn new(session: Option<SessionState>, mut entries: Vec<InventoryEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { session, entries }
    }

    /// The empty, signed-out state.
    pub fn signed_out() -> Self {
        Self {
            session: None,
            entries: Vec::new(),
        }
    }

    /// Case-insensitive substring filter over this snapshot's entries.
    /// Pure; the store is not consulted.
    pub fn search(&self, query: &str) -> Vec<InventoryEntry> {
        filter_entries(&self.entries, query)
    }
}
