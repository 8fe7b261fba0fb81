//! Inventory ledger domain module.
//!
//! This crate contains the reconciliation rules for pantry entries,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Deciding what to store and actually storing it are kept apart: callers
//! feed the current stored count in and apply the returned [`EntryMutation`]
//! themselves.

pub mod entry;
pub mod reconcile;
pub mod search;

pub use entry::{InventoryEntry, ItemDocument};
pub use reconcile::{EntryMutation, reconcile_add, reconcile_remove};
pub use search::filter_entries;
