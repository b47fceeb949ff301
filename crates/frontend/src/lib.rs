//! FloraMed Dashboard - Yew WASM Frontend
//!
//! Sidebar shell, profile greeting and herbal-news feed. The view-model
//! and fetch rules live in `floramed-core`; this crate renders them and
//! supplies the browser adapters.

mod app;
mod components;
mod config;
mod pages;
mod services;

pub use app::{App, Route};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("FloraMed dashboard starting");
    yew::Renderer::<App>::new().render();
}
