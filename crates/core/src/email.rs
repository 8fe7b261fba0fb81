//! Normalized email addresses.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// An email address that has survived normalization.
///
/// Construction trims surrounding whitespace and lowercases, so two
/// spellings of the same address compare equal everywhere downstream.
/// Validation is intentionally shallow: non-empty and contains `@`.
/// Anything stricter belongs to the provider that actually delivers mail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: &str) -> Result<Self, AuthError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let email = EmailAddress::new("  Pantry@Example.COM  ").unwrap();
        assert_eq!(email.as_str(), "pantry@example.com");
    }

    #[test]
    fn equal_after_normalization() {
        let a = EmailAddress::new("cook@example.com").unwrap();
        let b = EmailAddress::new("COOK@example.com ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(EmailAddress::new("   "), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn rejects_address_without_at_sign() {
        assert_eq!(
            EmailAddress::new("not-an-email"),
            Err(AuthError::InvalidEmail)
        );
    }
}
