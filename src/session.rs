//! Authenticated session passed explicitly to every data-access call.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow that mints tokens lives outside this crate. Front-ends hand
//! the issued bearer token to [`Session::from_bearer_token`] (or build a
//! session directly) and pass it down to whatever needs authenticated calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::api::bearer_header_value;
use crate::types::User;

/// Errors produced while reading identity claims out of a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token is empty")]
    EmptyToken,
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token claims are invalid: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    user_id: Option<u64>,
    username: String,
}

/// The authenticated user and the bearer token proving it.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    token: String,
}

impl Session {
    #[must_use]
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self { user, token: token.into() }
    }

    /// Build a session from a JWT access token, reading `user_id` and
    /// `username` from its payload.
    ///
    /// The signature is not verified; the server does that on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, not three dot-separated parts,
    /// or its payload is not base64url JSON carrying a `username`.
    pub fn from_bearer_token(token: &str) -> Result<Self, SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SessionError::Malformed);
        };
        let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let claims: Claims = serde_json::from_slice(&raw)?;
        Ok(Self::new(User { id: claims.user_id, username: claims.username }, token))
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        bearer_header_value(&self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
