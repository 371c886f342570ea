//! # voxelia-client
//!
//! Leptos + WASM frontend for the Voxelia launcher. Replaces the React +
//! Apollo login screen with a Rust-native UI layer.
//!
//! This crate contains the login page, the session probe used by the
//! authentication guard, the GraphQL transport with its query cache, and the
//! cookie-backed session store.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked from the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
