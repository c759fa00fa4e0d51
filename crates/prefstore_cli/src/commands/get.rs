//! Get command implementation.

use super::{CommandResult, Target};
use prefstore_storage::KeyValueBackend;
use std::io::Write;

/// Prints the value of `key`; a missing key is an error.
pub fn run(target: &Target, key: &str, out: &mut impl Write) -> CommandResult {
    let backend = target.open_existing()?;
    match backend.get(&target.namespace.key(key))? {
        Some(value) => {
            writeln!(out, "{value}")?;
            Ok(())
        }
        None => Err(format!("Key not found: {key}").into()),
    }
}
