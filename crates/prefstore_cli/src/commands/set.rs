//! Set command implementation.

use super::{CommandResult, Target};
use prefstore_storage::KeyValueBackend;
use tracing::info;

/// Stores `value` under `key`, creating the file if needed.
pub fn run(target: &Target, key: &str, value: &str) -> CommandResult {
    info!("Setting {:?} in {:?}", key, target.path);
    let mut backend = target.open_for_write()?;
    backend.set(&target.namespace.key(key), value)?;
    Ok(())
}
