//! Failure taxonomy for car API calls.

/// Errors produced by [`super::CarApi`] implementations.
///
/// Transport failures and non-2xx responses are distinct variants but callers
/// handle them on one path per operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, reset, CORS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// A success response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No transport is available in this build (e.g. a non-browser render).
    #[error("car API unavailable in this build")]
    Unavailable,
}

impl ApiError {
    /// Response body for server-reported failures, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status for server-reported failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
