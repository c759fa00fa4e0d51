//! Typed accessors layered over the string store.
//!
//! Values are stored as text: booleans as `true`/`false`, numbers in their
//! `Display` form. A getter returns its default when the key is absent or
//! the stored text does not parse.

use crate::defaults::UserDefaults;
use prefstore_storage::KeyValueBackend;
use std::str::FromStr;

impl<B: KeyValueBackend> UserDefaults<B> {
    fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(key, raw = %raw, "stored preference does not parse");
                None
            }
        }
    }

    /// Stores a boolean.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Reads a boolean, or `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Stores a 32-bit integer.
    pub fn set_integer(&mut self, key: &str, value: i32) {
        self.set(key, &value.to_string());
    }

    /// Reads a 32-bit integer, or `default`.
    #[must_use]
    pub fn get_integer(&self, key: &str, default: i32) -> i32 {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Stores a 64-bit integer.
    pub fn set_large_integer(&mut self, key: &str, value: i64) {
        self.set(key, &value.to_string());
    }

    /// Reads a 64-bit integer, or `default`.
    #[must_use]
    pub fn get_large_integer(&self, key: &str, default: i64) -> i64 {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Stores a single-precision float.
    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, &value.to_string());
    }

    /// Reads a single-precision float, or `default`.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Stores a double-precision float.
    pub fn set_double(&mut self, key: &str, value: f64) {
        self.set(key, &value.to_string());
    }

    /// Reads a double-precision float, or `default`.
    #[must_use]
    pub fn get_double(&self, key: &str, default: f64) -> f64 {
        self.get_parsed(key).unwrap_or(default)
    }

    /// Stores a string. Same as [`UserDefaults::set`].
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }

    /// Reads a string, or `default`.
    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BackendKind, Namespace, UserDefaults};
    use prefstore_storage::InMemoryBackend;

    fn store() -> UserDefaults<InMemoryBackend> {
        UserDefaults::with_backend(
            Namespace::default(),
            BackendKind::Memory,
            InMemoryBackend::new(),
        )
    }

    #[test]
    fn bool_values() {
        let mut prefs = store();
        assert!(prefs.get_bool("sound", true));
        prefs.set_bool("sound", false);
        assert!(!prefs.get_bool("sound", true));
        assert_eq!(prefs.get("sound").as_deref(), Some("false"));
    }

    #[test]
    fn integer_values() {
        let mut prefs = store();
        assert_eq!(prefs.get_integer("level", 1), 1);
        prefs.set_integer("level", -42);
        assert_eq!(prefs.get_integer("level", 1), -42);

        prefs.set_large_integer("score", i64::MAX);
        assert_eq!(prefs.get_large_integer("score", 0), i64::MAX);
    }

    #[test]
    fn integer_out_of_range_uses_default() {
        let mut prefs = store();
        prefs.set_large_integer("big", i64::from(i32::MAX) + 1);
        assert_eq!(prefs.get_integer("big", 7), 7);
    }

    #[test]
    fn float_values() {
        let mut prefs = store();
        prefs.set_float("volume", 0.25);
        assert_eq!(prefs.get_float("volume", 1.0), 0.25);

        prefs.set_double("ratio", 1.0 / 3.0);
        assert_eq!(prefs.get_double("ratio", 0.0), 1.0 / 3.0);
    }

    #[test]
    fn unparsable_uses_default() {
        let mut prefs = store();
        prefs.set("volume", "loud");
        assert_eq!(prefs.get_float("volume", 0.5), 0.5);
        assert!(prefs.get_bool("volume", true));
        assert_eq!(prefs.get_integer("volume", 3), 3);
    }

    #[test]
    fn string_values() {
        let mut prefs = store();
        assert_eq!(prefs.get_string("name", "anon"), "anon");
        prefs.set_string("name", "Zoë");
        assert_eq!(prefs.get_string("name", "anon"), "Zoë");
    }
}
