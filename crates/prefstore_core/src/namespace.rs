//! Key namespacing.
//!
//! The backing stores are shared with other scripts (and, in a browser, with
//! the runtime itself), so every key is written as `<Namespace>::<Key>`.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Namespace used when none is configured.
///
/// Existing saves were written under this prefix, so changing it orphans
/// them.
pub const DEFAULT_NAMESPACE: &str = "CCUserDefault";

/// Separator between the namespace and the caller's key.
pub const SEPARATOR: &str = "::";

/// A validated key prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNamespace`] if `name` is empty or contains
    /// the separator.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::InvalidNamespace {
                name,
                reason: "namespace must not be empty",
            });
        }
        if name.contains(SEPARATOR) {
            return Err(CoreError::InvalidNamespace {
                name,
                reason: "namespace must not contain '::'",
            });
        }
        Ok(Self(name))
    }

    /// Returns the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the storage key for `key`.
    #[must_use]
    pub fn key(&self, key: &str) -> String {
        let mut full = String::with_capacity(self.0.len() + SEPARATOR.len() + key.len());
        full.push_str(&self.0);
        full.push_str(SEPARATOR);
        full.push_str(key);
        full
    }

    /// Returns the caller's key if `stored` belongs to this namespace.
    #[must_use]
    pub fn strip<'a>(&self, stored: &'a str) -> Option<&'a str> {
        stored.strip_prefix(self.0.as_str())?.strip_prefix(SEPARATOR)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
