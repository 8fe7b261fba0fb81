//! The authentication provider boundary.

use std::sync::Arc;

use larder_core::{AuthError, EmailAddress, IdentityId};

/// Credential-backed identity provider.
///
/// The managed provider is an external collaborator; implementations mint
/// and verify identities, nothing more. Who is currently signed in lives in
/// [`crate::SessionManager`], not here.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new account and return its identity.
    async fn create_account(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError>;

    /// Verify credentials and return the account's identity.
    ///
    /// Unknown email and wrong password surface as the same
    /// [`AuthError::InvalidCredentials`]; callers cannot tell which half
    /// was wrong.
    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError>;

    /// End the provider-side session, if the provider keeps one.
    async fn end_session(&self) -> Result<(), AuthError>;
}

#[async_trait::async_trait]
impl<P> AuthProvider for Arc<P>
where
    P: AuthProvider + ?Sized,
{
    async fn create_account(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError> {
        (**self).create_account(email, password).await
    }

    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<IdentityId, AuthError> {
        (**self).authenticate(email, password).await
    }

    async fn end_session(&self) -> Result<(), AuthError> {
        (**self).end_session().await
    }
}
