//! # eventhaven
//!
//! Leptos + WASM single-page application for browsing and managing
//! hotel-hosted events across Sri Lanka. The public surface is an event
//! calendar and listing; hotel owners sign in with Google to manage their
//! hotel profiles and events in the admin panel.
//!
//! The backend is an external REST service; this crate is the browser
//! client only. Browser-dependent code (fetch, localStorage, Google
//! Identity) is gated behind the `csr` feature so the default native build
//! compiles the pure application logic for `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — mounts the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
