//! Session management: the auth provider boundary, and the session manager
//! that owns the current identity and fans out transitions to observers.

pub mod in_memory;
pub mod manager;
pub mod provider;

pub use in_memory::{InMemoryAuthProvider, PasswordPolicy};
pub use manager::{SessionManager, SessionObserver, SessionState};
pub use provider::AuthProvider;
