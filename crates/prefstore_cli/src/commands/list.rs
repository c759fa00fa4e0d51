//! List command implementation.

use super::{CommandResult, Target};
use prefstore_core::probe_key;
use prefstore_storage::{FileBackend, KeyValueBackend};
use serde::Serialize;
use std::io::Write;

/// A single listed preference.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Entry {
    /// Key without the namespace prefix.
    pub key: String,
    /// Stored value.
    pub value: String,
}

/// Listing result.
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Preference file path.
    pub path: String,
    /// Namespace listed.
    pub namespace: String,
    /// Entries, sorted by key.
    pub entries: Vec<Entry>,
    /// Entries in the file that belong to other namespaces.
    pub foreign_count: usize,
}

/// Collects the entries of `target`'s namespace.
pub fn collect(target: &Target, backend: &FileBackend) -> CommandResult<ListResult> {
    let mut entries = Vec::new();
    let mut foreign_count = 0;
    let sentinel = probe_key(&target.namespace);

    for stored in backend.keys()? {
        if stored == sentinel {
            continue;
        }
        match target.namespace.strip(&stored) {
            Some(key) => {
                let value = backend.get(&stored)?.unwrap_or_default();
                entries.push(Entry {
                    key: key.to_string(),
                    value,
                });
            }
            None => foreign_count += 1,
        }
    }
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(ListResult {
        path: target.path.display().to_string(),
        namespace: target.namespace.to_string(),
        entries,
        foreign_count,
    })
}

/// Prints the namespace's entries as text or JSON.
pub fn run(target: &Target, format: &str, out: &mut impl Write) -> CommandResult {
    let backend = target.open_existing()?;
    let result = collect(target, &backend)?;

    match format {
        "json" => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        "text" => print_text(&result, out)?,
        other => return Err(format!("Unknown format: {other}").into()),
    }
    Ok(())
}

fn print_text(result: &ListResult, out: &mut impl Write) -> CommandResult {
    writeln!(out, "Preferences: {} ({})", result.path, result.namespace)?;
    for entry in &result.entries {
        writeln!(out, "  {} = {}", entry.key, entry.value)?;
    }
    writeln!(out, "{} entries", result.entries.len())?;
    if result.foreign_count > 0 {
        writeln!(out, "{} entries in other namespaces", result.foreign_count)?;
    }
    Ok(())
}
