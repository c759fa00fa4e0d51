//! # PrefStore WASM
//!
//! Browser preference storage for engine builds that target the web.
//!
//! Values are kept as strings under `<namespace>::<key>` in the strongest
//! storage the page can use:
//! 1. **localStorage** - kept across visits
//! 2. **sessionStorage** - kept for the tab's lifetime
//! 3. **memory** - kept until the page unloads
//!
//! Each tier is probed with a sentinel write before it is chosen, so
//! browsers that expose `localStorage` but throw on `setItem` (private
//! modes, zero quotas, sandboxed frames) drop to the next tier.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { setValue, getValue, removeValue, WebPrefs } from 'prefstore_wasm';
//!
//! await init();
//!
//! setValue("volume", "0.8");
//! getValue("volume");      // "0.8"
//! removeValue("volume");
//! getValue("volume");      // null
//!
//! const prefs = new WebPrefs("MyGame", "session");
//! prefs.set("level", "3");
//! ```
//!
//! None of the calls throw once the module is loaded; storage failures
//! read back as missing values.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod prefs;
mod utils;

pub use backend::{StorageArea, WebBackend, WebStorage};
pub use error::*;
pub use prefs::*;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}
