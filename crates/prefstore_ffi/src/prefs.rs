//! Preference FFI functions.

use crate::buffer::{into_raw_string, read_string};
use crate::error::{clear_last_error, set_last_error, FfiError, PrefStoreResult};
use crate::state::GLOBAL;
use crate::types::PrefStoreConfig;
use std::ffi::c_char;
use std::ptr;

/// Stages a configuration for the process-wide store.
///
/// Must be called before any other preference function to take effect.
///
/// # Returns
///
/// - `Ok` when the configuration was staged
/// - `NullPointer` if `config` is null
/// - `InvalidArgument` if a field is unusable
/// - `AlreadyInitialized` if the store is already open
///
/// The message for a failure is available through
/// `prefstore_get_last_error`.
///
/// # Safety
///
/// `config` must be null or point to a valid `PrefStoreConfig` whose
/// non-null string fields are NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn prefstore_configure(config: *const PrefStoreConfig) -> PrefStoreResult {
    clear_last_error();

    let result = match config.as_ref() {
        Some(config) => config.to_core().and_then(|core| GLOBAL.configure(core)),
        None => Err(FfiError::NullPointer),
    };
    match result {
        Ok(()) => PrefStoreResult::Ok,
        Err(e) => {
            set_last_error(e.to_string());
            PrefStoreResult::from(&e)
        }
    }
}

/// Stores `value` under `key`.
///
/// Null arguments and storage failures are ignored.
///
/// # Safety
///
/// `key` and `value` must each be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prefstore_set_value(key: *const c_char, value: *const c_char) {
    let (Some(key), Some(value)) = (read_string(key), read_string(value)) else {
        return;
    };
    GLOBAL.with(|store| store.set(&key, &value));
}

/// Returns the value stored under `key`.
///
/// # Returns
///
/// A newly allocated NUL-terminated string owned by the caller (release it
/// with `prefstore_free_string`), or null if the key is absent, `key` is
/// null, or the store could not be read.
///
/// # Safety
///
/// `key` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prefstore_get_value(key: *const c_char) -> *mut c_char {
    let Some(key) = read_string(key) else {
        return ptr::null_mut();
    };
    match GLOBAL.with(|store| store.get(&key)) {
        Some(value) => into_raw_string(value),
        None => ptr::null_mut(),
    }
}

/// Removes `key` if present.
///
/// Null arguments and storage failures are ignored.
///
/// # Safety
///
/// `key` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn prefstore_remove_value(key: *const c_char) {
    let Some(key) = read_string(key) else {
        return;
    };
    GLOBAL.with(|store| store.remove(&key));
}

/// Returns the selected tier: 0 persistent, 1 session, 2 memory.
///
/// Opens the store if it is not open yet.
#[no_mangle]
pub extern "C" fn prefstore_backend_kind() -> u32 {
    GLOBAL.with(|store| store.backend_kind() as u32)
}
