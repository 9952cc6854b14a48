//! reqwest-backed [`CarApi`] for native callers.
//!
//! No request timeout is configured; calls rely on the transport defaults.

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::payload::{CarPayload, PayloadPart};
use super::{CarApi, car_endpoint, mine_endpoint};
use crate::session::Session;
use crate::types::{Car, CarId};

pub struct HttpCarApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCarApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, config))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self { http, base_url: config.base_url.clone() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder, session: &Session) -> Result<reqwest::Response, ApiError> {
        let response = request
            .header(AUTHORIZATION, session.authorization())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        Ok(response)
    }

    async fn send_json<T>(&self, request: reqwest::RequestBuilder, session: &Session) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(request, session).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Convert a payload into a reqwest multipart form.
fn multipart_form(payload: &CarPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in payload.parts() {
        form = match part {
            PayloadPart::Text { name, value } => form.text(name, value.to_owned()),
            PayloadPart::File { name, upload } => {
                let mut file = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
                if let Some(content_type) = upload.content_type.as_deref() {
                    file = file
                        .mime_str(content_type)
                        .map_err(|e| ApiError::Transport(e.to_string()))?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl CarApi for HttpCarApi {
    async fn list_mine(&self, session: &Session) -> Result<Vec<Car>, ApiError> {
        let request = self.http.get(mine_endpoint(&self.base_url));
        self.send_json(request, session).await
    }

    async fn create(&self, session: &Session, payload: &CarPayload) -> Result<Car, ApiError> {
        let request = self
            .http
            .post(mine_endpoint(&self.base_url))
            .multipart(multipart_form(payload)?);
        self.send_json(request, session).await
    }

    async fn update(&self, session: &Session, id: CarId, payload: &CarPayload) -> Result<Car, ApiError> {
        let request = self
            .http
            .put(car_endpoint(&self.base_url, id))
            .multipart(multipart_form(payload)?);
        self.send_json(request, session).await
    }

    async fn delete(&self, session: &Session, id: CarId) -> Result<(), ApiError> {
        let request = self.http.delete(car_endpoint(&self.base_url, id));
        self.send(request, session).await?;
        Ok(())
    }
}
