//! # client
//!
//! Leptos frontend for the Communication LTD site: informational pages behind
//! a browser-local session flag.
//!
//! `state::auth` holds the session view-model, `util::flag_store` persists it
//! to `localStorage`, and `util::guard` decides per route whether a page
//! renders or redirects to login. Pages and components are presentational.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
