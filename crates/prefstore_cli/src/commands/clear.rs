//! Clear command implementation.

use super::list::collect;
use super::{CommandResult, Target};
use prefstore_storage::KeyValueBackend;
use std::io::Write;
use tracing::info;

/// Removes every key in the namespace and returns how many were removed.
///
/// Keys of other namespaces are kept. A dry run writes the keys it would
/// remove to `out` and changes nothing.
pub fn run(target: &Target, dry_run: bool, out: &mut impl Write) -> CommandResult<usize> {
    let mut backend = target.open_existing()?;
    let entries = collect(target, &backend)?.entries;

    if dry_run {
        for entry in &entries {
            writeln!(out, "Would remove {}", entry.key)?;
        }
        return Ok(entries.len());
    }

    info!("Clearing {} entries from {:?}", entries.len(), target.path);
    for entry in &entries {
        backend.remove(&target.namespace.key(&entry.key))?;
    }
    Ok(entries.len())
}
