//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. The home page reloads
//! its car list whenever the session token changes and clears it on sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use carlot::{Session, User};

/// Key under which the bearer token is kept in `localStorage`.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// State restored from a stored bearer token.
    ///
    /// Tokens whose payload cannot be read as JWT claims are still used, with
    /// an anonymous user.
    pub fn from_token(token: Option<&str>) -> Self {
        let session = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|token| {
                Session::from_bearer_token(token).unwrap_or_else(|err| {
                    tracing::debug!(error = %err, "stored token has no readable claims");
                    Session::new(User::default(), token)
                })
            });
        Self { session }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }
}
