//! Antigravity Dashboard - Leptos Frontend
//!
//! Runs inside the host WebView. Account data and the switch action come
//! from the host through the exports in `bridge`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use antigravity_types as _;
use chrono as _;
use js_sys as _;
use serde_json as _;
use wasm_bindgen as _;
use web_sys as _;

use antigravity_dashboard::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Antigravity Dashboard {} starting...", env!("GIT_VERSION"));

    mount_to_body(App);
}
