//! # gatehouse-client
//!
//! Leptos + WASM frontend for a local-only login demo: a login form that
//! validates credentials client-side, stores a session flag in
//! `localStorage`, and a dashboard that is only shown while that flag is set.
//!
//! The login and dashboard flows are explicit state machines in `state`,
//! driven by the route components in `pages`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
