//! In-memory auth provider.

use std::collections::HashMap;
use std::sync::RwLock;

use larder_core::{AuthError, EmailAddress, IdentityId};

use crate::provider::AuthProvider;

/// Minimum password length policy for account creation.
///
/// Defaults to 6 characters, the managed provider's own floor, so tests
/// and dev runs reject the same passwords production would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_len: usize,
}

impl PasswordPolicy {
    pub const DEFAULT_MIN_LEN: usize = 6;

    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Read the policy from `LARDER_PASSWORD_MIN_LEN`, falling back to the
    /// default when unset or unparseable.
    pub fn from_env() -> Self {
        let min_len = std::env::var("LARDER_PASSWORD_MIN_LEN")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "LARDER_PASSWORD_MIN_LEN is not a number; using default"
                    );
                    None
                }
            })
            .unwrap_or(Self::DEFAULT_MIN_LEN);
        Self { min_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn check(&self, password: &str) -> Result<(), AuthError> {
        if password.chars().count() < self.min_len {
            return Err(AuthError::WeakPassword {
                min_len: self.min_len,
            });
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN)
    }
}

#[derive(Debug, Clone)]
struct Account {
    identity: IdentityId,
    password: String,
}

/// In-memory credential store.
///
/// Intended for tests/dev. Passwords are compared verbatim, not hashed;
/// never use this outside a test or local run. Accounts are keyed by the
/// normalized email, so lookups are case-insensitive by construction.
#[derive(Debug)]
pub struct InMemoryAuthProvider {
    accounts: RwLock<HashMap<EmailAddress, Account>>,
    policy: PasswordPolicy,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self::with_policy(PasswordPolicy::default())
    }

    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            policy,
        }
    }
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn create_account(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError> {
        self.policy.check(password)?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AuthError::provider("lock poisoned"))?;

        if accounts.contains_key(email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let identity = IdentityId::new();
        accounts.insert(
            email.clone(),
            Account {
                identity,
                password: password.to_string(),
            },
        );
        Ok(identity)
    }

    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AuthError::provider("lock poisoned"))?;

        match accounts.get(email) {
            Some(account) if account.password == password => Ok(account.identity),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn end_session(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw).unwrap()
    }

    #[tokio::test]
    async fn created_account_authenticates_with_same_credentials() {
        let provider = InMemoryAuthProvider::new();
        let addr = email("cook@example.com");

        let identity = provider.create_account(&addr, "secret-1").await.unwrap();
        let authenticated = provider.authenticate(&addr, "secret-1").await.unwrap();
        assert_eq!(authenticated, identity);
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let provider = InMemoryAuthProvider::new();
        let addr = email("cook@example.com");

        provider.create_account(&addr, "secret-1").await.unwrap();
        let err = provider.create_account(&addr, "other-secret").await.unwrap_err();
        assert_eq!(err, AuthError::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn registration_is_case_insensitive_on_email() {
        let provider = InMemoryAuthProvider::new();

        provider
            .create_account(&email("Cook@Example.com"), "secret-1")
            .await
            .unwrap();
        let err = provider
            .create_account(&email("cook@example.com"), "secret-1")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn authentication_matches_differently_cased_email() {
        let provider = InMemoryAuthProvider::new();

        let identity = provider
            .create_account(&email("cook@example.com"), "secret-1")
            .await
            .unwrap();
        let authenticated = provider
            .authenticate(&email("COOK@EXAMPLE.COM"), "secret-1")
            .await
            .unwrap();
        assert_eq!(authenticated, identity);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let provider = InMemoryAuthProvider::new();
        let addr = email("cook@example.com");
        provider.create_account(&addr, "secret-1").await.unwrap();

        let wrong_password = provider.authenticate(&addr, "wrong").await.unwrap_err();
        let unknown_email = provider
            .authenticate(&email("ghost@example.com"), "secret-1")
            .await
            .unwrap_err();
        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_email, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn short_password_fails_the_policy() {
        let provider = InMemoryAuthProvider::new();
        let err = provider
            .create_account(&email("cook@example.com"), "five!")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::WeakPassword { min_len: 6 });
    }

    #[tokio::test]
    async fn custom_policy_is_enforced() {
        let provider = InMemoryAuthProvider::with_policy(PasswordPolicy::new(10));
        let err = provider
            .create_account(&email("cook@example.com"), "ninechars")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::WeakPassword { min_len: 10 });
    }

    #[test]
    fn policy_counts_characters_not_bytes() {
        // Six characters, more than six bytes.
        assert!(PasswordPolicy::default().check("pâtée!").is_ok());
    }
}
