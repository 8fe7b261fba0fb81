//! Reconciliation rules for a single ledger entry.
//!
//! Each rule is a pure function from (current stored count, requested
//! quantity) to the store action the caller must apply. Keeping the
//! decision IO-free lets the same rules back any store implementation and
//! makes the arithmetic directly testable.

use larder_core::Quantity;

/// The store action decided by a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMutation {
    /// Overwrite the entry's document with this count. Never zero.
    Write(u64),
    /// Delete the entry's document.
    Delete,
    /// Leave the store untouched.
    Noop,
}

/// Decide the stored count after adding `quantity` of an item.
///
/// An absent entry is created at `quantity`; an existing count increments.
/// Saturating, so a pathological stored count cannot wrap.
pub fn reconcile_add(current: Option<u64>, quantity: Quantity) -> EntryMutation {
    EntryMutation::Write(current.unwrap_or(0).saturating_add(quantity.get()))
}

/// Decide the store action after removing `quantity` of an item.
///
/// Removing an absent entry is a no-op, not an error. Draining an entry to
/// zero or past it deletes the document; a non-positive count is never
/// written.
pub fn reconcile_remove(current: Option<u64>, quantity: Quantity) -> EntryMutation {
    match current {
        None => EntryMutation::Noop,
        Some(count) if count <= quantity.get() => EntryMutation::Delete,
        Some(count) => EntryMutation::Write(count - quantity.get()),
    }
}
