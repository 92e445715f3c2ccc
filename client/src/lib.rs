//! # client
//!
//! Leptos + WASM frontend for the camera wall dashboard.
//!
//! This crate contains the dashboard page, camera card components, the
//! dashboard state model, network types, and small browser utilities
//! (clock, voice hints, fullscreen). The server crate renders it with SSR
//! and the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
