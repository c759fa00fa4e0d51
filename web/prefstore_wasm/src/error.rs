//! Error types for WASM bindings.

use prefstore_storage::StorageError;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Errors that can occur in the WASM bindings.
#[derive(Debug, Error)]
pub enum WasmError {
    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<prefstore_core::CoreError> for WasmError {
    fn from(err: prefstore_core::CoreError) -> Self {
        WasmError::InvalidInput(err.to_string())
    }
}

/// Result type for WASM operations.
pub type WasmResult<T> = Result<T, WasmError>;

/// Renders a thrown JS value as text.
fn describe(val: &JsValue) -> String {
    if let Some(exception) = val.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    val.as_string().unwrap_or_else(|| format!("{:?}", val))
}

/// Converts an exception thrown by a Web Storage call.
pub(crate) fn storage_error(context: &str, val: &JsValue) -> StorageError {
    StorageError::Unavailable(format!("{context}: {}", describe(val)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefstore_core::Namespace;

    #[test]
    fn core_errors_are_invalid_input() {
        let err = WasmError::from(Namespace::new("").unwrap_err());
        assert!(matches!(err, WasmError::InvalidInput(_)));
        assert!(err.to_string().starts_with("invalid input: "));
    }
}
