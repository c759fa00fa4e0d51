//! Remove command implementation.

use super::{CommandResult, Target};
use prefstore_storage::KeyValueBackend;
use tracing::info;

/// Removes `key`. Removing an absent key succeeds.
pub fn run(target: &Target, key: &str) -> CommandResult {
    info!("Removing {:?} from {:?}", key, target.path);
    let mut backend = target.open_existing()?;
    backend.remove(&target.namespace.key(key))?;
    Ok(())
}
