//! `larder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): strongly-typed identifiers, validated value objects, and the
//! error taxonomy shared by every other crate in the workspace.

pub mod email;
pub mod error;
pub mod id;
pub mod item;

pub use email::EmailAddress;
pub use error::{AuthError, StoreError, ValidationError};
pub use id::IdentityId;
pub use item::{ItemName, Quantity};
