//! # pitwall
//!
//! Leptos + WASM frontend for the Fanta Formula Uno league application.
//! Covers authentication, the league dashboard, league create/join flows,
//! the league detail view, and the driver-selection table, composed with a
//! collapsible sidebar shell.
//!
//! The backend HTTP API is an external collaborator; its inconsistent
//! response envelopes are absorbed by `net::normalize` so page code can rely
//! on stable records.

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
