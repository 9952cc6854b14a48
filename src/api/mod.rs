//! Data access for the per-user car collection.
//!
//! DESIGN
//! ======
//! `CarApi` is the only seam between state and transport. The reqwest
//! implementation lives in `http`; the browser client supplies its own fetch
//! implementation and tests supply in-memory doubles.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list mine | GET | `/api/cars/mine/` |
//! | create | POST | `/api/cars/mine/` |
//! | update | PUT | `/api/cars/{id}/` |
//! | delete | DELETE | `/api/cars/{id}/` |

pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod payload;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub use config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use error::ApiError;
#[cfg(feature = "http")]
pub use http::HttpCarApi;
pub use payload::{CarPayload, PayloadPart};

use crate::session::Session;
use crate::state::form::SubmitRequest;
use crate::types::{Car, CarId};

/// The four authenticated car operations.
///
/// Every call carries the caller's [`Session`]; a missing or expired token is
/// not special-cased and surfaces as whatever [`ApiError`] the server causes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CarApi {
    /// `GET /api/cars/mine/`: every car owned by the session's user.
    async fn list_mine(&self, session: &Session) -> Result<Vec<Car>, ApiError>;

    /// `POST /api/cars/mine/`: create a car, returning the stored record.
    async fn create(&self, session: &Session, payload: &CarPayload) -> Result<Car, ApiError>;

    /// `PUT /api/cars/{id}/`: replace a car, returning the stored record.
    async fn update(&self, session: &Session, id: CarId, payload: &CarPayload) -> Result<Car, ApiError>;

    /// `DELETE /api/cars/{id}/`. Any response body is ignored.
    async fn delete(&self, session: &Session, id: CarId) -> Result<(), ApiError>;
}

/// Route a form submission to `create` or `update`.
///
/// # Errors
///
/// Returns whatever the underlying operation returns.
pub async fn send_submit<A>(api: &A, session: &Session, request: &SubmitRequest) -> Result<Car, ApiError>
where
    A: CarApi + ?Sized,
{
    match request {
        SubmitRequest::Create { payload } => api.create(session, payload).await,
        SubmitRequest::Update { id, payload } => api.update(session, *id, payload).await,
    }
}

/// `{base}/api/cars/mine/`
#[must_use]
pub fn mine_endpoint(base_url: &str) -> String {
    format!("{}/api/cars/mine/", base_url.trim_end_matches('/'))
}

/// `{base}/api/cars/{id}/`
#[must_use]
pub fn car_endpoint(base_url: &str, id: CarId) -> String {
    format!("{}/api/cars/{id}/", base_url.trim_end_matches('/'))
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}
