//! Inventory value objects: item names and quantities.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The name of a pantry item, also its document key in the store.
///
/// Construction trims surrounding whitespace but preserves case, so
/// "Rice" and "rice" are distinct entries. Empty (or all-whitespace)
/// names are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive whole number of physical items.
///
/// Callers hand in `i64` so that negative input is representable and can
/// be rejected with a diagnostic instead of wrapping at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw < 1 {
            return Err(ValidationError::QuantityNotPositive);
        }
        Ok(Self(raw as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
