//! Temporary preference-file fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding the persistent and session tier files.
///
/// The directory is deleted on drop.
pub struct TempPrefs {
    dir: TempDir,
}

impl TempPrefs {
    /// Creates an empty fixture. No files exist until written.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Directory containing both tier files.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path for the persistent tier.
    pub fn persistent_path(&self) -> PathBuf {
        self.dir.path().join("persistent.json")
    }

    /// Path for the session tier.
    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// Path under a regular file, which can never be created.
    pub fn unwritable_path(&self, name: &str) -> PathBuf {
        let blocker = self.dir.path().join("blocker");
        if !blocker.exists() {
            fs::write(&blocker, b"").expect("Failed to create blocker file");
        }
        blocker.join(name)
    }

    /// Writes garbage to the persistent tier so it fails to open.
    pub fn corrupt_persistent(&self) {
        fs::write(self.persistent_path(), b"{ not json").expect("Failed to corrupt file");
    }

    /// Reads the persistent tier file, or `None` if it does not exist.
    pub fn read_persistent(&self) -> Option<String> {
        fs::read_to_string(self.persistent_path()).ok()
    }
}

impl Default for TempPrefs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_in_dir() {
        let prefs = TempPrefs::new();
        assert!(prefs.persistent_path().starts_with(prefs.dir()));
        assert!(prefs.session_path().starts_with(prefs.dir()));
        assert!(prefs.read_persistent().is_none());
    }

    #[test]
    fn unwritable_path_cannot_be_created() {
        let prefs = TempPrefs::new();
        let path = prefs.unwritable_path("x.json");
        assert!(fs::create_dir_all(path.parent().unwrap()).is_err());
    }
}
