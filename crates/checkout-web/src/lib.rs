//! Card Checkout Web Frontend
//!
//! Leptos-based WASM widget: one page, one form, two HTTP calls.

mod app;
mod components;
mod form;

pub use app::{App, Theme};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
