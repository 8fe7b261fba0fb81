//! Error taxonomy shared across the workspace.
//!
//! Three independent families, one per concern:
//!
//! - [`AuthError`]: credential and session failures raised by providers
//!   and checked before inventory operations.
//! - [`ValidationError`]: rejected domain input; raised before any
//!   provider or store call is made.
//! - [`StoreError`]: document store failures, including precondition
//!   conflicts surfaced by revision-checked writes.

use thiserror::Error;

/// Failures raised by authentication providers and session guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The supplied email did not survive normalization.
    #[error("invalid email address")]
    InvalidEmail,

    /// Sign-up was attempted with an email that already has an account.
    #[error("email is already registered")]
    EmailAlreadyRegistered,

    /// The password does not satisfy the configured minimum length.
    #[error("password is too weak: must be at least {min_len} characters")]
    WeakPassword { min_len: usize },

    /// Sign-in failed: unknown email or wrong password. Deliberately a
    /// single variant so callers cannot tell which half was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An operation that requires an active session was invoked without one.
    #[error("not signed in")]
    NotSignedIn,

    /// The provider itself failed (transport, backend outage).
    #[error("auth provider error: {0}")]
    Provider(String),
}

impl AuthError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}

/// Rejected domain input. Raised before any provider or store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantities are whole numbers of physical items; zero and negatives
    /// are rejected at the boundary rather than clamped.
    #[error("quantity must be a positive whole number")]
    QuantityNotPositive,

    /// Item names must contain at least one non-whitespace character.
    #[error("item name cannot be empty")]
    EmptyName,
}

/// Document store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A revision precondition did not hold at commit time. Callers are
    /// expected to re-read and retry.
    #[error("document revision conflict: {0}")]
    Conflict(String),

    /// The backend itself failed (transport, remote fault).
    #[error("document store error: {0}")]
    Backend(String),

    /// A stored document could not be decoded into its expected shape.
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_messages_are_stable() {
        assert_eq!(AuthError::InvalidEmail.to_string(), "invalid email address");
        assert_eq!(
            AuthError::EmailAlreadyRegistered.to_string(),
            "email is already registered"
        );
        assert_eq!(
            AuthError::WeakPassword { min_len: 6 }.to_string(),
            "password is too weak: must be at least 6 characters"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert_eq!(AuthError::NotSignedIn.to_string(), "not signed in");
    }

    #[test]
    fn store_error_helpers_build_expected_variants() {
        assert_eq!(
            StoreError::conflict("revision moved"),
            StoreError::Conflict("revision moved".to_string())
        );
        assert_eq!(
            StoreError::backend("connection reset"),
            StoreError::Backend("connection reset".to_string())
        );
        assert_eq!(
            StoreError::malformed("count is not an integer"),
            StoreError::Malformed("count is not an integer".to_string())
        );
    }

    #[test]
    fn validation_error_messages_are_stable() {
        assert_eq!(
            ValidationError::QuantityNotPositive.to_string(),
            "quantity must be a positive whole number"
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "item name cannot be empty"
        );
    }
}
