//! # client
//!
//! Leptos + WASM frontend for the car listing page. Rendering and browser
//! plumbing live here; list/form state and the `CarApi` seam come from the
//! `carlot` core crate.
//!
//! Build with the `csr` feature (e.g. `trunk serve --features csr`) to get
//! the gloo-net transport and the `mount_to_body` entry point. Without it the
//! crate compiles natively so its view-model helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and panic reporting, then mounts
/// [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
