//! # portfolio
//!
//! Leptos + WASM personal portfolio site: pages, shared chrome, the theme
//! controller, the splash loading sequence, and the chat widget client.
//!
//! The same crate is compiled twice: with `ssr` for the server binary and
//! with `hydrate` for the browser bundle, whose entry point is [`hydrate`].

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
