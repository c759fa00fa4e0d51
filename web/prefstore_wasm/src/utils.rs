//! Module setup and console helpers.

use wasm_bindgen::JsValue;

/// Routes Rust panics to the browser console.
///
/// Called once from the module start function.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Writes a debug line to the browser console.
///
/// No-op off wasm32 so host-side unit tests never reach into JS.
pub(crate) fn console_debug(message: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::debug_1(&JsValue::from_str(message));
    }
}
