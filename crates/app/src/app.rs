//! Pantry operations: the session entry points plus list/add/remove, each
//! returning a fresh snapshot.
//!
//! Every mutation follows the same pipeline:
//!
//! ```text
//! guard session → validate input → read current document (with revision)
//!   → reconcile (pure) → one conditional write/delete → full re-read
//! ```
//!
//! The conditional write is pinned to the revision the read observed, so an
//! interleaved writer surfaces as `StoreError::Conflict` instead of a
//! silently lost update. Retrying is the caller's decision.

use larder_core::{IdentityId, ItemName, Quantity, StoreError};
use larder_ledger::{
    EntryMutation, InventoryEntry, ItemDocument, reconcile_add, reconcile_remove,
};
use larder_session::{
    AuthProvider, InMemoryAuthProvider, PasswordPolicy, SessionManager,
};
use larder_store::{
    CollectionPath, DocumentKey, DocumentStore, ExpectedRevision, InMemoryDocumentStore,
};

use crate::error::LedgerError;
use crate::snapshot::AppSnapshot;

/// The application core: one document store, one session manager, and the
/// pantry operations the presentation layer calls.
///
/// Operations are awaited to completion one at a time, including the
/// trailing refresh; the returned snapshot is the only cache.
pub struct PantryApp<S, P> {
    store: S,
    sessions: SessionManager<P>,
}

impl PantryApp<InMemoryDocumentStore, InMemoryAuthProvider> {
    /// Wire the application against the in-memory store and provider, with
    /// the password policy taken from the environment.
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryDocumentStore::new(),
            InMemoryAuthProvider::with_policy(PasswordPolicy::from_env()),
        )
    }
}

impl<S, P> PantryApp<S, P>
where
    S: DocumentStore,
    P: AuthProvider,
{
    pub fn new(store: S, provider: P) -> Self {
        Self {
            store,
            sessions: SessionManager::new(provider),
        }
    }

    /// The session manager, for subscribing to transitions.
    pub fn sessions(&self) -> &SessionManager<P> {
        &self.sessions
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session operations
    // ─────────────────────────────────────────────────────────────────────

    /// Register a new account; it becomes current and its (empty) pantry is
    /// fetched.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AppSnapshot, LedgerError> {
        let identity = self.sessions.sign_up(email, password).await?;
        self.refreshed(identity).await
    }

    /// Sign in; the identity's pantry is fetched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AppSnapshot, LedgerError> {
        let identity = self.sessions.sign_in(email, password).await?;
        self.refreshed(identity).await
    }

    /// Sign out. The store is not consulted; the returned snapshot is the
    /// empty signed-out state.
    pub async fn sign_out(&self) -> Result<AppSnapshot, LedgerError> {
        self.sessions.sign_out().await?;
        Ok(AppSnapshot::signed_out())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ledger operations
    // ─────────────────────────────────────────────────────────────────────

    /// Re-read the current identity's pantry.
    pub async fn list(&self) -> Result<AppSnapshot, LedgerError> {
        let identity = self.sessions.require_identity()?;
        self.refreshed(identity).await
    }

    /// Add `quantity` of `name`, creating the entry if absent.
    pub async fn add_item(&self, name: &str, quantity: i64) -> Result<AppSnapshot, LedgerError> {
        let identity = self.sessions.require_identity()?;
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?;

        let collection = CollectionPath::pantry_of(identity);
        let key = DocumentKey::from(&name);

        let (current, expected) = self.current_count(&collection, &key).await?;
        // Add always writes; the reconciliation cannot decide otherwise.
        if let EntryMutation::Write(count) = reconcile_add(current, quantity) {
            self.store
                .set_document(&collection, &key, ItemDocument::new(count).to_fields(), expected)
                .await?;
            tracing::debug!(item = %name, count, "entry written");
        }

        self.refreshed(identity).await
    }

    /// Remove `quantity` of `name`. Draining an entry to zero or past it
    /// deletes the entry; removing an absent name is a no-op.
    pub async fn remove_item(&self, name: &str, quantity: i64) -> Result<AppSnapshot, LedgerError> {
        let identity = self.sessions.require_identity()?;
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?;

        let collection = CollectionPath::pantry_of(identity);
        let key = DocumentKey::from(&name);

        let (current, expected) = self.current_count(&collection, &key).await?;
        match reconcile_remove(current, quantity) {
            EntryMutation::Write(count) => {
                self.store
                    .set_document(&collection, &key, ItemDocument::new(count).to_fields(), expected)
                    .await?;
                tracing::debug!(item = %name, count, "entry written");
            }
            EntryMutation::Delete => {
                self.store.delete_document(&collection, &key, expected).await?;
                tracing::debug!(item = %name, "entry deleted");
            }
            EntryMutation::Noop => {}
        }

        self.refreshed(identity).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    /// Read the current stored count together with the precondition that
    /// pins the follow-up write to what was read.
    async fn current_count(
        &self,
        collection: &CollectionPath,
        key: &DocumentKey,
    ) -> Result<(Option<u64>, ExpectedRevision), LedgerError> {
        match self.store.get_document(collection, key).await? {
            Some((fields, revision)) => {
                let doc = ItemDocument::from_fields(&fields)?;
                Ok((Some(doc.count), ExpectedRevision::Exact(revision)))
            }
            None => Ok((None, ExpectedRevision::Absent)),
        }
    }

    /// Full re-read of the identity's pantry into a fresh snapshot. No
    /// incremental merging; the new snapshot replaces the old wholesale.
    async fn refreshed(&self, identity: IdentityId) -> Result<AppSnapshot, LedgerError> {
        let collection = CollectionPath::pantry_of(identity);
        let documents = self.store.list_documents(&collection).await?;

        let mut entries = Vec::with_capacity(documents.len());
        for (key, fields) in documents {
            let name = ItemName::new(key.as_str()).map_err(|_| {
                StoreError::malformed(format!("document key {key:?} is not a valid item name"))
            })?;
            let doc = ItemDocument::from_fields(&fields)?;
            entries.push(InventoryEntry::new(name, doc.count));
        }

        tracing::debug!(identity = %identity, entries = entries.len(), "pantry refreshed");
        Ok(AppSnapshot::new(self.sessions.current(), entries))
    }
}
