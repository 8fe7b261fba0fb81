//! The session manager: owns the current identity and fans out transitions.

use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use larder_core::{AuthError, EmailAddress, IdentityId};

use crate::provider::AuthProvider;

/// The authenticated session, while one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub identity: IdentityId,
    pub email: EmailAddress,
    pub started_at: DateTime<Utc>,
}

/// Observer of session transitions.
///
/// Invoked once immediately on subscribe with the current state, then once
/// per actual identity change. Callbacks run on the caller's task outside
/// the manager's locks; keep them brief.
pub trait SessionObserver: Send + Sync {
    fn session_changed(&self, session: Option<&SessionState>);
}

/// Owns the current identity and notifies observers when it changes.
///
/// A transition is a change of the current identity, not of the session
/// record: repeating a sign-in for the identity that is already current
/// dispatches nothing, as does signing out while signed out. Signing in as
/// a different account while signed in is a single transition.
pub struct SessionManager<P> {
    provider: P,
    current: RwLock<Option<SessionState>>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
}

impl<P: AuthProvider> SessionManager<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            current: RwLock::new(None),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<SessionState> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    /// The current identity, or [`AuthError::NotSignedIn`].
    pub fn require_identity(&self) -> Result<IdentityId, AuthError> {
        self.current()
            .map(|session| session.identity)
            .ok_or(AuthError::NotSignedIn)
    }

    /// Register an observer and invoke it immediately with the current
    /// state.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        observer.session_changed(self.current().as_ref());
        if let Ok(mut observers) = self.observers.lock() {
            observers.push(observer);
        }
    }

    /// Register a new account; on success it becomes the current identity.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityId, AuthError> {
        let email = EmailAddress::new(email)?;
        let identity = self.provider.create_account(&email, password).await?;
        tracing::info!(identity = %identity, "account created");
        self.transition(Some(SessionState {
            identity,
            email,
            started_at: Utc::now(),
        }));
        Ok(identity)
    }

    /// Verify credentials; on success that identity becomes current.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityId, AuthError> {
        let email = EmailAddress::new(email)?;
        let identity = self.provider.authenticate(&email, password).await?;
        tracing::info!(identity = %identity, "signed in");
        self.transition(Some(SessionState {
            identity,
            email,
            started_at: Utc::now(),
        }));
        Ok(identity)
    }

    /// Clear the current identity.
    ///
    /// Local state is cleared and observers notified before the provider
    /// call, so a provider failure can never leave a stale identity active.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.transition(None);
        self.provider.end_session().await
    }

    /// Swap the session and notify observers once if the identity actually
    /// changed. Notification runs after the state lock is released.
    fn transition(&self, next: Option<SessionState>) {
        {
            let mut guard = match self.current.write() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            let current_identity = guard.as_ref().map(|session| session.identity);
            let next_identity = next.as_ref().map(|session| session.identity);
            if current_identity == next_identity {
                return;
            }
            *guard = next.clone();
        }

        match &next {
            Some(session) => tracing::info!(identity = %session.identity, "session started"),
            None => tracing::info!("session ended"),
        }
        self.notify(next.as_ref());
    }

    fn notify(&self, session: Option<&SessionState>) {
        let observers: Vec<Arc<dyn SessionObserver>> = match self.observers.lock() {
            Ok(observers) => observers.clone(),
            Err(_) => return,
        };
        for observer in &observers {
            observer.session_changed(session);
        }
    }
}
