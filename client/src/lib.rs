//! Si7ati browser front end.
//!
//! ARCHITECTURE
//! ============
//! The `si7ati` core owns session state; this crate provides the browser
//! seams (`localStorage`, timers), mirrors gate transitions into a Leptos
//! signal, and maps the core's route guards onto router components.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
