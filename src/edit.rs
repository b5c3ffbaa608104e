//! In-place edits on a parsed entry list (add, remove, enable, disable).
//!
//! Host matching is exact, the same way the parser keeps host tokens.

use crate::entry::{Address, HostEntry};

fn matches(entry: &HostEntry, host: &str, address: Option<&Address>) -> bool {
    entry.host == host && address.map_or(true, |a| entry.address == *a)
}

/// What [`add`] did with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended as a new mapping.
    Added,
    /// The pair existed with the other enabled state and was switched.
    StateChanged,
    /// The pair existed in the same state.
    Unchanged,
}

impl AddOutcome {
    pub fn changed(self) -> bool {
        self != AddOutcome::Unchanged
    }
}

/// Append an entry unless the same address/host pair is already present.
///
/// An existing pair takes the enabled state of `entry`, in either direction.
pub fn add(entries: &mut Vec<HostEntry>, entry: HostEntry) -> AddOutcome {
    if let Some(existing) = entries
        .iter_mut()
        .find(|e| e.address == entry.address && e.host == entry.host)
    {
        if existing.enabled == entry.enabled {
            return AddOutcome::Unchanged;
        }
        existing.enabled = entry.enabled;
        return AddOutcome::StateChanged;
    }
    entries.push(entry);
    AddOutcome::Added
}

/// Remove every entry for `host`, optionally only those bound to `address`.
pub fn remove(entries: &mut Vec<HostEntry>, host: &str, address: Option<&Address>) -> usize {
    let before = entries.len();
    entries.retain(|e| !matches(e, host, address));
    before - entries.len()
}

/// Set the enabled state of matching entries. Returns how many changed.
pub fn set_enabled(
    entries: &mut [HostEntry],
    host: &str,
    address: Option<&Address>,
    enabled: bool,
) -> usize {
    let mut changed = 0;
    for entry in entries.iter_mut().filter(|e| matches(e, host, address)) {
        if entry.enabled != enabled {
            entry.enabled = enabled;
            changed += 1;
        }
    }
    changed
}

/// All entries for `host`, in file order.
pub fn find<'a>(entries: &'a [HostEntry], host: &str) -> Vec<&'a HostEntry> {
    entries.iter().filter(|e| e.host == host).collect()
}

/// Number of entries matching `host` (and `address`, if given).
pub fn count(entries: &[HostEntry], host: &str, address: Option<&Address>) -> usize {
    entries.iter().filter(|e| matches(e, host, address)).count()
}
