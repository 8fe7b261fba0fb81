//! In-memory document store.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value as JsonValue;

use larder_core::StoreError;

use crate::document_store::DocumentStore;
use crate::path::{CollectionPath, DocumentKey};
use crate::revision::{ExpectedRevision, Revision};

#[derive(Debug, Clone)]
struct StoredDocument {
    fields: JsonValue,
    revision: Revision,
}

/// In-memory document store with the same observable semantics as the
/// managed backend.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(CollectionPath, DocumentKey), StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list_documents(
        &self,
        collection: &CollectionPath,
    ) -> Result<Vec<(DocumentKey, JsonValue)>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        Ok(documents
            .iter()
            .filter(|((path, _), _)| path == collection)
            .map(|((_, key), doc)| (key.clone(), doc.fields.clone()))
            .collect())
    }

    async fn get_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
    ) -> Result<Option<(JsonValue, Revision)>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        Ok(documents
            .get(&(collection.clone(), key.clone()))
            .map(|doc| (doc.fields.clone(), doc.revision)))
    }

    async fn set_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        fields: JsonValue,
        expected: ExpectedRevision,
    ) -> Result<Revision, StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let slot = (collection.clone(), key.clone());
        let current = documents.get(&slot).map(|doc| doc.revision);
        expected.check(current)?;

        let revision = current.map_or(Revision::FIRST, Revision::next);
        documents.insert(slot, StoredDocument { fields, revision });
        Ok(revision)
    }

    async fn delete_document(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
        expected: ExpectedRevision,
    ) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let slot = (collection.clone(), key.clone());
        let current = documents.get(&slot).map(|doc| doc.revision);
        expected.check(current)?;

        documents.remove(&slot);
        Ok(())
    }
}
