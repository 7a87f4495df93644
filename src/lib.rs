//! # gezcez-oauth-client
//!
//! Leptos + WASM single-page client for the Gezcez identity service. Lets
//! a visitor log in (or create an account), pick one of the registered
//! downstream applications, and get redirected into it with an
//! authorization token attached.
//!
//! The crate is a thin presentation and orchestration layer: `net` talks
//! to the HTTP API, `state` owns the persisted session and the flow
//! decision, `pages`/`components` render it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
