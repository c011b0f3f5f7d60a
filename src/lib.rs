//! # medicare-client
//!
//! Leptos + WASM frontend for the MediCareAI healthcare portal. Replaces
//! the React client with a Rust-native UI layer.
//!
//! This crate contains pages, shared components, session state, and the
//! REST API helpers used to talk to the portal backend. The backend itself
//! (FastAPI, `http://localhost:8000`) is an external collaborator; this
//! crate only submits credentials and forms to it and renders the results.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
