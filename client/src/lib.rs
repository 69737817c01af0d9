//! # client
//!
//! Leptos + WASM frontend for the chat room.
//!
//! This crate contains the session manager, the message synchronizer, the
//! Socket.IO transport adapter, and the pages/components that render the
//! login screen, message list and composer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
