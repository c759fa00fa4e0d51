//! Preference store configuration.

use crate::error::{CoreError, CoreResult};
use crate::namespace::{Namespace, DEFAULT_NAMESPACE};
use crate::selector::BackendKind;
use std::path::PathBuf;

/// File name of the persistent tier, relative to the working directory.
pub const DEFAULT_PERSISTENT_FILE: &str = "prefstore.json";

/// File name prefix of the session tier inside the OS temp directory.
///
/// The process id is appended, so concurrent processes on defaults never
/// share a session file.
pub const DEFAULT_SESSION_PREFIX: &str = "prefstore-session";

fn default_session_path() -> PathBuf {
    std::env::temp_dir().join(format!("{DEFAULT_SESSION_PREFIX}-{}.json", std::process::id()))
}

/// Configuration for opening a preference store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix written before every key.
    pub namespace: String,

    /// File backing the persistent tier.
    pub persistent_path: PathBuf,

    /// File backing the session tier. Emptied each time a store is opened.
    pub session_path: PathBuf,

    /// Strongest tier to try. Stronger tiers are skipped.
    pub preferred: BackendKind,

    /// Byte limit applied to every tier (`None` = unlimited).
    pub quota_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            persistent_path: PathBuf::from(DEFAULT_PERSISTENT_FILE),
            session_path: default_session_path(),
            preferred: BackendKind::Persistent,
            quota_bytes: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the persistent tier's file.
    #[must_use]
    pub fn persistent_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persistent_path = path.into();
        self
    }

    /// Sets the session tier's file.
    #[must_use]
    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    /// Sets the strongest tier to try.
    #[must_use]
    pub const fn preferred(mut self, kind: BackendKind) -> Self {
        self.preferred = kind;
        self
    }

    /// Sets the per-tier byte limit.
    #[must_use]
    pub const fn quota_bytes(mut self, limit: Option<usize>) -> Self {
        self.quota_bytes = limit;
        self
    }

    /// Checks the configuration and returns the parsed namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the namespace is invalid or a tier path is empty.
    pub fn validate(&self) -> CoreResult<Namespace> {
        let namespace = Namespace::new(self.namespace.clone())?;

        if self.persistent_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "persistent path is empty".into(),
            });
        }
        if self.session_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "session path is empty".into(),
            });
        }

        Ok(namespace)
    }
}
