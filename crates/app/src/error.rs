//! Application-level error aggregation.

use thiserror::Error;

use larder_core::{AuthError, StoreError, ValidationError};

/// Everything a pantry operation can fail with.
///
/// For one mutation either the read succeeded and exactly one conditional
/// write or delete was attempted, or nothing was written. Callers decide
/// whether to retry; nothing here does so silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_messages() {
        let err = LedgerError::from(AuthError::NotSignedIn);
        assert_eq!(err.to_string(), "not signed in");

        let err = LedgerError::from(ValidationError::QuantityNotPositive);
        assert_eq!(err.to_string(), "quantity must be a positive whole number");

        let err = LedgerError::from(StoreError::conflict("revision moved"));
        assert_eq!(err.to_string(), "document revision conflict: revision moved");
    }
}
