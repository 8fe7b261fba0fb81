//! Ledger entries and their stored document shape.

use serde::{Deserialize, Serialize};

use larder_core::{ItemName, StoreError};

/// One row of a user's pantry: an item name and how many are on hand.
///
/// The count is always at least 1. A count that would reach zero deletes
/// the entry instead of being stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: ItemName,
    pub count: u64,
}

impl InventoryEntry {
    pub fn new(name: ItemName, count: u64) -> Self {
        Self { name, count }
    }

    /// Display form of the name: first character uppercased, the rest as
    /// typed. The stored key is never modified.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The document stored under an item's key: exactly `{"count": n}`.
///
/// Documents cross the store boundary as [`serde_json::Value`]; this struct
/// is the typed edge. Unknown extra fields are ignored on the way in, and a
/// negative or fractional count fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub count: u64,
}

impl ItemDocument {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn from_fields(fields: &serde_json::Value) -> Result<Self, StoreError> {
        serde_json::from_value(fields.clone()).map_err(|err| StoreError::malformed(err.to_string()))
    }

    pub fn to_fields(&self) -> serde_json::Value {
        serde_json::json!({ "count": self.count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ItemName {
        ItemName::new(raw).unwrap()
    }

    #[test]
    fn display_name_uppercases_first_character_only() {
        let entry = InventoryEntry::new(name("olive oil"), 2);
        assert_eq!(entry.display_name(), "Olive oil");
        assert_eq!(entry.name.as_str(), "olive oil");
    }

    #[test]
    fn display_name_leaves_already_capitalized_names_alone() {
        let entry = InventoryEntry::new(name("Rice"), 1);
        assert_eq!(entry.display_name(), "Rice");
    }

    #[test]
    fn document_round_trips_through_fields() {
        let doc = ItemDocument::new(7);
        let fields = doc.to_fields();
        assert_eq!(fields, serde_json::json!({ "count": 7 }));
        assert_eq!(ItemDocument::from_fields(&fields).unwrap(), doc);
    }

    #[test]
    fn document_rejects_negative_count() {
        let fields = serde_json::json!({ "count": -1 });
        assert!(matches!(
            ItemDocument::from_fields(&fields),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn document_rejects_missing_count() {
        let fields = serde_json::json!({ "amount": 3 });
        assert!(matches!(
            ItemDocument::from_fields(&fields),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn document_ignores_unknown_extra_fields() {
        let fields = serde_json::json!({ "count": 4, "note": "back shelf" });
        assert_eq!(ItemDocument::from_fields(&fields).unwrap().count, 4);
    }
}
