//! String marshaling across the C boundary.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Copies a borrowed NUL-terminated string into an owned `String`.
///
/// Invalid UTF-8 is replaced with U+FFFD. Returns `None` for null.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub(crate) unsafe fn read_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Hands `value` to the caller as a newly allocated C string.
///
/// Returns null if `value` contains an interior NUL, which a C string cannot
/// carry.
pub(crate) fn into_raw_string(value: String) -> *mut c_char {
    match CString::new(value) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => {
            tracing::warn!("stored preference contains NUL; reporting as absent");
            ptr::null_mut()
        }
    }
}

/// Frees a string returned by PrefStore.
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by `prefstore_get_value` that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn prefstore_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
