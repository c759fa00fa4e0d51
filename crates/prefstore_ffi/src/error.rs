//! Error codes and result types.

use std::cell::RefCell;
use std::ffi::CString;
use thiserror::Error;

/// Result code for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefStoreResult {
    /// Operation succeeded.
    Ok = 0,
    /// Invalid argument.
    InvalidArgument = 1,
    /// Null pointer.
    NullPointer = 2,
    /// The store was already initialized by an earlier call.
    AlreadyInitialized = 3,
}

/// Errors raised while handling a configuration call.
#[derive(Debug, Error)]
pub enum FfiError {
    /// A required pointer was null.
    #[error("null pointer argument")]
    NullPointer,

    /// A field held an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store has already been opened.
    #[error("preference store already initialized")]
    AlreadyInitialized,

    /// The core rejected the configuration.
    #[error(transparent)]
    Core(#[from] prefstore_core::CoreError),
}

impl From<&FfiError> for PrefStoreResult {
    fn from(err: &FfiError) -> Self {
        match err {
            FfiError::NullPointer => PrefStoreResult::NullPointer,
            FfiError::InvalidArgument(_) | FfiError::Core(_) => PrefStoreResult::InvalidArgument,
            FfiError::AlreadyInitialized => PrefStoreResult::AlreadyInitialized,
        }
    }
}

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Sets the last error message.
pub fn set_last_error(message: impl Into<String>) {
    let msg = message.into();
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clears the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Gets the last error message as a C string.
///
/// Returns null if no error is set.
///
/// # Safety
///
/// The returned pointer is valid until the next FFI call on this thread.
#[no_mangle]
pub extern "C" fn prefstore_get_last_error() -> *const std::ffi::c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(cstr) => cstr.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clears the last error message.
#[no_mangle]
pub extern "C" fn prefstore_clear_error() {
    clear_last_error();
}
