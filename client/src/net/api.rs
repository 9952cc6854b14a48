//! `CarApi` over the browser `fetch` API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, multipart bodies
//! built as `web_sys::FormData`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the crate
//! still compiles and its pure helpers can be tested.
//!
//! ERROR HANDLING
//! ==============
//! Fetch rejections (network, CORS) become `ApiError::Transport`; non-2xx
//! responses become `ApiError::Status` with whatever body could be read.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use carlot::api::{ApiConfig, ApiError, CarApi, CarPayload, ConfigError};
use carlot::{Car, CarId, Session};
#[cfg(feature = "csr")]
use carlot::api::{PayloadPart, car_endpoint, mine_endpoint};
#[cfg(feature = "csr")]
use carlot::ImageUpload;

/// Base URL baked in at build time through `CARLOT_API_BASE_URL`.
///
/// # Errors
///
/// Returns an error if the configured URL is not absolute http(s).
pub fn build_config() -> Result<ApiConfig, ConfigError> {
    config_from(option_env!("CARLOT_API_BASE_URL"))
}

fn config_from(raw: Option<&'static str>) -> Result<ApiConfig, ConfigError> {
    ApiConfig::from_lookup(|_| raw.map(str::to_owned))
}

#[derive(Clone, Debug)]
pub struct BrowserCarApi {
    base_url: String,
}

impl BrowserCarApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for BrowserCarApi {
    fn default() -> Self {
        let config = build_config().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid build-time API base URL");
            ApiConfig::default()
        });
        Self::new(&config)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl CarApi for BrowserCarApi {
    async fn list_mine(&self, session: &Session) -> Result<Vec<Car>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::get(&mine_endpoint(&self.base_url));
            let response = send(authorized(request, session).build().map_err(transport)?).await?;
            decode(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, session: &Session, payload: &CarPayload) -> Result<Car, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&mine_endpoint(&self.base_url));
            let body = form_data(payload)?;
            let response = send(authorized(request, session).body(body).map_err(transport)?).await?;
            decode(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, session: &Session, id: CarId, payload: &CarPayload) -> Result<Car, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::put(&car_endpoint(&self.base_url, id));
            let body = form_data(payload)?;
            let response = send(authorized(request, session).body(body).map_err(transport)?).await?;
            decode(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, session: &Session, id: CarId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::delete(&car_endpoint(&self.base_url, id));
            send(authorized(request, session).build().map_err(transport)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, id);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn authorized(request: gloo_net::http::RequestBuilder, session: &Session) -> gloo_net::http::RequestBuilder {
    request.header("Authorization", &session.authorization())
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let response = request.send().await.map_err(transport)?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn decode<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "csr")]
fn form_data(payload: &CarPayload) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for part in payload.parts() {
        match part {
            PayloadPart::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
            PayloadPart::File { name, upload } => {
                let blob = upload_blob(upload)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(form)
}

#[cfg(feature = "csr")]
fn upload_blob(upload: &ImageUpload) -> Result<web_sys::Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &upload.content_type {
        options.set_type(content_type);
    }
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}
