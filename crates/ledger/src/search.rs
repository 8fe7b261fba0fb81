//! Client-side filtering of a fetched entry list.

use crate::entry::InventoryEntry;

/// Case-insensitive substring filter over an already-fetched list.
///
/// Pure and synchronous; the store is never consulted. An empty query
/// matches every entry.
pub fn filter_entries(entries: &[InventoryEntry], query: &str) -> Vec<InventoryEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.as_str().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
