//! Thin wrappers over browser globals. No-ops outside the `csr` build.

#![allow(clippy::unused_async)]

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

#[cfg(feature = "csr")]
use carlot::ImageUpload;

use crate::state::auth::TOKEN_STORAGE_KEY;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Bearer token persisted by the login flow.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = TOKEN_STORAGE_KEY;
        None
    }
}

pub fn clear_stored_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Blocking `window.alert`.
pub fn show_alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        tracing::info!(message, "alert");
    }
}

/// First file selected in a file input, read fully into memory.
#[cfg(feature = "csr")]
pub async fn selected_upload(ev: &leptos::ev::Event) -> Option<ImageUpload> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    read_upload(&file).await
}

#[cfg(feature = "csr")]
async fn read_upload(file: &web_sys::File) -> Option<ImageUpload> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| tracing::warn!(error = ?err, "could not read selected file"))
        .ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mut upload = ImageUpload::new(file.name(), bytes);
    let content_type = file.type_();
    if !content_type.is_empty() {
        upload.content_type = Some(content_type);
    }
    Some(upload)
}

