//! # PrefStore FFI
//!
//! Stable C ABI for the PrefStore user-preference store.
//!
//! This crate provides:
//! - `prefstore_set_value` / `prefstore_get_value` / `prefstore_remove_value`
//! - A lazily initialized, process-wide store
//! - Memory ownership conventions for returned strings
//! - Optional configuration before first use
//!
//! ## Memory ownership
//!
//! Strings passed in are borrowed for the duration of the call. Strings
//! returned by `prefstore_get_value` are owned by the caller and must be
//! released with `prefstore_free_string`.
//!
//! ## Errors
//!
//! The three accessors never fail. Storage problems degrade to dropped
//! writes and absent reads. Only `prefstore_configure` returns a result code.

#![warn(missing_docs)]

mod buffer;
mod error;
mod prefs;
mod state;
mod types;

pub use buffer::prefstore_free_string;
pub use error::{prefstore_clear_error, prefstore_get_last_error, FfiError, PrefStoreResult};
pub use prefs::{
    prefstore_backend_kind, prefstore_configure, prefstore_get_value, prefstore_remove_value,
    prefstore_set_value,
};
pub use types::PrefStoreConfig;
