//! # kids-hub-client
//!
//! Leptos + WASM front end for the Kids Hub school administration system.
//!
//! This crate implements the browser-side session and authorization gate:
//! a typed session store provided through context, a one-shot bootstrap
//! resolver reconciling the persisted bearer token with the identity
//! endpoint, centralized route guards, and the login, logout, forced
//! password-change, and employee registration flows. Everything else the
//! UI shows is driven by the remote REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire `log` to the console,
/// and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
