//! Load and save entries through a [`HostsStore`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::backup;
use crate::document;
use crate::entry::HostEntry;
use crate::platform::HostsStore;

/// Read the store and parse it.
pub fn load(store: &dyn HostsStore) -> Result<Vec<HostEntry>> {
    let text = store.read()?;
    let entries = document::parse(&text);
    debug!("loaded {} entries from {}", entries.len(), store.path().display());
    Ok(entries)
}

/// Text that `save` would write.
pub fn render_preview(entries: &[HostEntry]) -> Result<String> {
    Ok(document::serialize(entries)?)
}

/// Serialize and write `entries`.
///
/// Serialization happens first, so an invalid entry fails before the disk
/// is touched. With `backup_dir`, the current file content is snapshotted
/// before the write; a file that cannot be read is skipped with a warning.
/// Returns the backup path, if one was made.
pub fn save(
    store: &dyn HostsStore,
    entries: &[HostEntry],
    backup_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let text = document::serialize(entries)?;

    let backup_path = match backup_dir {
        Some(dir) => match store.read() {
            Ok(previous) => Some(backup::snapshot(dir, &previous)?),
            Err(e) => {
                warn!("not backing up {}: {e}", store.path().display());
                None
            }
        },
        None => None,
    };

    store
        .write(&text)
        .with_context(|| format!("write {}", store.path().display()))?;
    debug!("saved {} entries to {}", entries.len(), store.path().display());
    Ok(backup_path)
}
