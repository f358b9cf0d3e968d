//! # farmcast
//!
//! Leptos + WASM frontend for the Farmcast weather application.
//!
//! This crate contains pages, components, application state, and the
//! network layer for registration, JWT login, and the geolocation-driven
//! current-weather dashboard. Authorization is enforced server-side; the
//! client decodes tokens for display purposes only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
