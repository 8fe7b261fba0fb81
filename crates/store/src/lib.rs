//! Document store boundary: addressing, revisions, and the async trait the
//! rest of the workspace consumes.
//!
//! The managed backend is an external collaborator; this crate ships an
//! in-memory implementation with the same observable semantics for
//! tests/dev.

pub mod document_store;
pub mod in_memory;
pub mod path;
pub mod revision;

pub use document_store::DocumentStore;
pub use in_memory::InMemoryDocumentStore;
pub use path::{CollectionPath, DocumentKey};
pub use revision::{ExpectedRevision, Revision};
