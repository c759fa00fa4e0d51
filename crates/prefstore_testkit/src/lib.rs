//! # PrefStore Testkit
//!
//! Test utilities for PrefStore.
//!
//! This crate provides:
//! - A fault-injecting backend for exercising fallback and error absorption
//! - Property-based test generators using proptest
//! - Temporary preference-file fixtures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prefstore_testkit::prelude::*;
//!
//! let backend = FaultyBackend::new();
//! backend.faults().fail_writes(true);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod faulty;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::faulty::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use faulty::*;
pub use fixtures::*;
pub use generators::*;
