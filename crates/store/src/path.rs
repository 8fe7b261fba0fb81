//! Store addressing: collection paths and document keys.

use serde::{Deserialize, Serialize};

use larder_core::{IdentityId, ItemName};

/// Slash-separated path of a document collection.
///
/// Operations on one collection never observe another; the path is the
/// isolation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// The pantry collection of one identity: `users/{identity}/pantry`.
    pub fn pantry_of(identity: IdentityId) -> Self {
        Self(format!("users/{identity}/pantry"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a document within its collection. Pantry entries use the item
/// name as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&ItemName> for DocumentKey {
    fn from(name: &ItemName) -> Self {
        Self(name.as_str().to_string())
    }
}
