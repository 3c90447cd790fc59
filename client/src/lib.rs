//! # outfit-client
//!
//! Leptos + WASM frontend for the outfit stylizer.
//!
//! This crate contains the home page, components, application state, the
//! backend HTTP client, and browser utilities. The `outfit-stylizer` host
//! renders it server-side; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
