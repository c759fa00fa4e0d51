//! Error types for PrefStore core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while configuring a preference store.
///
/// Storage failures never show up here: the accessors on
/// [`crate::UserDefaults`] absorb them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The namespace cannot be used as a key prefix.
    #[error("invalid namespace {name:?}: {reason}")]
    InvalidNamespace {
        /// The rejected namespace.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A configuration value is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}
