//! # sahay-ui
//!
//! Leptos + WASM frontend for the Sahay disaster-relief help-matching
//! application. Replaces the React client with a Rust-native UI layer.
//!
//! People who need assistance post help requests; volunteers browse and
//! apply to them. All business logic (persistence, auth issuance,
//! matching, file storage) lives in the external REST backend — this
//! crate holds pages, components, the session store, and the API client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
