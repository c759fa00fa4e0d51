//! Type definitions for FFI.

use crate::buffer::read_string;
use crate::error::FfiError;
use prefstore_core::{BackendKind, Config};
use std::ffi::c_char;

/// Configuration for the process-wide store.
///
/// Null string fields and a zero quota keep the defaults.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct PrefStoreConfig {
    /// Key namespace (null-terminated UTF-8).
    pub namespace: *const c_char,
    /// Persistent tier file path (null-terminated UTF-8).
    pub persistent_path: *const c_char,
    /// Session tier file path (null-terminated UTF-8).
    pub session_path: *const c_char,
    /// Strongest tier to try: 0 persistent, 1 session, 2 memory.
    pub preferred: u32,
    /// Per-tier byte limit, 0 for unlimited.
    pub quota_bytes: u64,
}

impl Default for PrefStoreConfig {
    fn default() -> Self {
        Self {
            namespace: std::ptr::null(),
            persistent_path: std::ptr::null(),
            session_path: std::ptr::null(),
            preferred: BackendKind::Persistent as u32,
            quota_bytes: 0,
        }
    }
}

/// Maps a wire tier number to a [`BackendKind`].
pub(crate) fn backend_kind_from_u32(value: u32) -> Option<BackendKind> {
    match value {
        0 => Some(BackendKind::Persistent),
        1 => Some(BackendKind::Session),
        2 => Some(BackendKind::Memory),
        _ => None,
    }
}

impl PrefStoreConfig {
    /// Converts to a validated core configuration.
    ///
    /// # Safety
    ///
    /// Every non-null string field must point to a NUL-terminated string.
    pub(crate) unsafe fn to_core(&self) -> Result<Config, FfiError> {
        let mut config = Config::default();

        if let Some(namespace) = read_string(self.namespace) {
            config = config.namespace(namespace);
        }
        if let Some(path) = read_string(self.persistent_path) {
            config = config.persistent_path(path);
        }
        if let Some(path) = read_string(self.session_path) {
            config = config.session_path(path);
        }

        let preferred = backend_kind_from_u32(self.preferred).ok_or_else(|| {
            FfiError::InvalidArgument(format!("unknown backend tier {}", self.preferred))
        })?;
        config = config.preferred(preferred);

        if self.quota_bytes > 0 {
            let limit = usize::try_from(self.quota_bytes)
                .map_err(|_| FfiError::InvalidArgument("quota too large".into()))?;
            config = config.quota_bytes(Some(limit));
        }

        config.validate()?;
        Ok(config)
    }
}
