//! Portfolio Web App (Leptos + WASM)

mod app;
mod components;
mod dom;
pub mod view_helpers;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
