//! # ui
//!
//! Leptos + WASM front end for the double-auction market page and the shared
//! drawing board. The host framework ("uproot") owns the transport: RPC rides
//! `uproot.invoke`, server pushes arrive as custom events, and per-participant
//! page variables come from `uproot.vars`. This crate renders the two pages,
//! owns their application state, and bridges to the host through `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;

/// WASM entry point: install logging and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
