//! OCR Upload Web Widget (Leptos + WASM)

pub mod app;
mod api;
pub mod browser;
mod components;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
