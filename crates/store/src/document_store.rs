//! The async document store trait.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use larder_core::StoreError;

use crate::path::{CollectionPath, DocumentKey};
use crate::revision::{ExpectedRevision, Revision};

/// Keyed JSON document storage with per-document revisions.
///
/// One document per key, fields carried as a JSON object. Writes are full
/// overwrites, never field merges. Every mutation takes an
/// [`ExpectedRevision`] precondition checked atomically against the
/// document's current revision; a mismatch surfaces as
/// [`StoreError::Conflict`] and leaves the store untouched, so a
/// read-modify-write round trip can never silently lose an interleaved
/// update.
///
/// Collections spring into existence on first write and list as empty
/// before that; there is no create/drop lifecycle.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in a collection as `(key, fields)` pairs.
    /// Order is unspecified.
    async fn list_documents(
        &self,
        collection: &CollectionPath,
    ) -> Result<Vec<(DocumentKey, JsonValue)>, StoreError>;

    /// Fetch one document together with its current revision.
    async fn get_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
    ) -> Result<Option<(JsonValue, Revision)>, StoreError>;

    /// Create or fully overwrite one document, returning the revision the
    /// write committed at.
    async fn set_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        fields: JsonValue,
        expected: ExpectedRevision,
    ) -> Result<Revision, StoreError>;

    /// Delete one document. Under [`ExpectedRevision::Any`] deleting an
    /// absent document succeeds; under `Exact` it conflicts.
    async fn delete_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        expected: ExpectedRevision,
    ) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn list_documents(
        &self,
        collection: &CollectionPath,
    ) -> Result<Vec<(DocumentKey, JsonValue)>, StoreError> {
        (**self).list_documents(collection).await
    }

    async fn get_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
    ) -> Result<Option<(JsonValue, Revision)>, StoreError> {
        (**self).get_document(collection, key).await
    }

    async fn set_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        fields: JsonValue,
        expected: ExpectedRevision,
    ) -> Result<Revision, StoreError> {
        (**self).set_document(collection, key, fields, expected).await
    }

    async fn delete_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        expected: ExpectedRevision,
    ) -> Result<(), StoreError> {
        (**self).delete_document(collection, key, expected).await
    }
}
