//! Application layer: composes the session manager, the reconciliation
//! rules, and the document store into the pantry operations the
//! presentation layer calls.

pub mod app;
pub mod error;
pub mod snapshot;


pub use app::PantryApp;
pub use error::LedgerError;
pub use snapshot::AppSnapshot;
