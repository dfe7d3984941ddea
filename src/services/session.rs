use std::sync::{Arc, Mutex};

use crate::api::SiteApi;
use crate::common::SessionError;
use crate::models::Identity;
use crate::types::LoginRequest;

/// Key under which the bearer token is persisted client-side.
pub const TOKEN_STORAGE_KEY: &str = "odonlab_token";

/// Where the bearer token survives page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local token storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|token| token.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Verified session state. `user` is only ever set from a successful
/// identity check, never from the token alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<Identity>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Identity::can_edit)
    }

    /// Token of a verified admin, the only credential editors may use.
    pub fn admin_token(&self) -> Option<&str> {
        if self.is_admin() { self.token() } else { None }
    }
}

/// Owns the session and its persisted token. Passed to whatever needs
/// admin gating instead of being looked up globally.
#[derive(Debug, Clone)]
pub struct SessionGuard<S: TokenStore> {
    store: S,
    session: Session,
}

impl<S: TokenStore> SessionGuard<S> {
    /// Picks up a persisted token. It stays unverified until `refresh`.
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        Self {
            store,
            session: Session { token, user: None },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn has_token(&self) -> bool {
        self.session.token.is_some()
    }

    /// Re-verifies the current token. Returns whether a user is signed in.
    pub async fn refresh<A: SiteApi>(&mut self, api: &A) -> bool {
        match self.session.token.clone() {
            Some(token) => self.verify(api, token).await,
            None => {
                self.clear();
                false
            }
        }
    }

    /// Adopts `token` if the backend vouches for it; any failure signs out.
    pub async fn verify<A: SiteApi>(&mut self, api: &A, token: String) -> bool {
        match api.current_user(&token).await {
            Ok(user) => {
                log::info!("Session verified for {} (admin: {})", user.username, user.is_admin);
                self.store.save(&token);
                self.session = Session {
                    token: Some(token),
                    user: Some(user),
                };
                true
            }
            Err(e) => {
                log::warn!("Session verification failed, signing out: {}", e);
                self.clear();
                false
            }
        }
    }

    pub async fn login<A: SiteApi>(
        &mut self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };

        let response = api.login(&credentials).await.map_err(|e| {
            log::warn!("Login rejected for {}: {}", credentials.username, e);
            SessionError::InvalidCredentials
        })?;

        if self.verify(api, response.access_token).await {
            Ok(())
        } else {
            Err(SessionError::Unverified)
        }
    }

    pub fn logout(&mut self) {
        log::info!("Signed out");
        self.clear();
    }

    fn clear(&mut self) {
        self.store.clear();
        self.session = Session::default();
    }
}
