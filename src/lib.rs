//! # hermenia-client
//!
//! Leptos + WASM frontend for the graph editor hosted in a Tauri webview.
//!
//! This crate contains the schema-driven form and list components, the graph
//! screen, and the dispatch client that exchanges named events with the
//! native backend. Every response replaces the cached node and edge
//! collections wholesale.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, detect the host bridge, mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = config::ClientConfig::load();
    let level = if config.verbose { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    let bridge = net::tauri::TauriBridge::detect(&config.command);
    log::info!("mounting with {bridge:?}");

    leptos::mount::mount_to_body(move || view! { <app::App config=config bridge=bridge/> });
}
