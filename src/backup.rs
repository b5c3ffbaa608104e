//! Timestamped snapshots of the hosts file taken before each save.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

const PREFIX: &str = "hosts-";
const SUFFIX: &str = ".bak";

/// Write `content` to a new `hosts-<UTC timestamp>.bak` in `dir`.
pub fn snapshot(dir: &Path, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
    let mut path = dir.join(format!("{PREFIX}{stamp}{SUFFIX}"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{PREFIX}{stamp}_{n}{SUFFIX}"));
        n += 1;
    }
    fs::write(&path, content).with_context(|| format!("write backup {}", path.display()))?;
    info!("backed up hosts file to {}", path.display());
    Ok(path)
}

/// Backups in `dir`, oldest first. A missing dir means no backups.
pub fn list(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(PREFIX) && name.ends_with(SUFFIX) && entry.path().is_file() {
            out.push(entry.path());
        }
    }
    // Timestamps are fixed-width, so name order is age order.
    out.sort();
    Ok(out)
}

/// Delete all but the newest `keep` backups. Returns the removed paths.
pub fn prune(dir: &Path, keep: usize) -> Result<Vec<PathBuf>> {
    let all = list(dir)?;
    let excess = all.len().saturating_sub(keep);
    let mut removed = Vec::with_capacity(excess);
    for path in all.into_iter().take(excess) {
        fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        removed.push(path);
    }
    Ok(removed)
}
