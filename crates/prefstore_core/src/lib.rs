//! # PrefStore Core
//!
//! Namespaced user-preference store for PrefStore.
//!
//! This crate provides:
//! - Backend selection by capability probing (persistent, session, memory)
//! - Key namespacing (`<Namespace>::<Key>`)
//! - Infallible set/get/remove accessors
//! - Typed accessors (bool, integers, floats, strings)
//!
//! ## Example
//!
//! ```rust
//! use prefstore_core::{BackendKind, Namespace, UserDefaults};
//! use prefstore_storage::InMemoryBackend;
//!
//! let mut prefs = UserDefaults::with_backend(
//!     Namespace::default(),
//!     BackendKind::Memory,
//!     InMemoryBackend::new(),
//! );
//! prefs.set("highscore", "9001");
//! assert_eq!(prefs.get("highscore").as_deref(), Some("9001"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "native")]
mod config;
mod defaults;
mod error;
mod namespace;
#[cfg(feature = "native")]
mod native;
mod selector;
mod typed;

#[cfg(feature = "native")]
pub use config::Config;
pub use defaults::UserDefaults;
pub use error::{CoreError, CoreResult};
pub use namespace::{Namespace, DEFAULT_NAMESPACE, SEPARATOR};
#[cfg(feature = "native")]
pub use native::NativeBackend;
pub use selector::{probe, probe_key, BackendKind, BackendSelector, Selected, PROBE_SUFFIX};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
