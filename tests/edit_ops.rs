//! add / remove / enable / disable on an entry list.

use hostedit::document::parse;
use hostedit::edit::{self, AddOutcome};
use hostedit::entry::{Address, HostEntry};

fn sample() -> Vec<HostEntry> {
    parse("127.0.0.1 localhost\n::1 localhost\n#10.0.0.2 api.test\n10.0.0.3 api.test\n")
}

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[test]
fn add_appends_new_mapping() {
    let mut entries = sample();
    let e = HostEntry::new(true, addr("10.0.0.9"), "new.test").unwrap();
    assert_eq!(edit::add(&mut entries, e.clone()), AddOutcome::Added);
    assert_eq!(entries.last(), Some(&e));
    assert_eq!(entries.len(), 5);
}

#[test]
fn add_does_not_duplicate() {
    let mut entries = sample();
    let e = HostEntry::new(true, addr("127.0.0.1"), "localhost").unwrap();
    assert_eq!(edit::add(&mut entries, e), AddOutcome::Unchanged);
    assert_eq!(entries.len(), 4);
}

#[test]
fn add_reenables_existing_disabled_mapping_in_place() {
    let mut entries = sample();
    let e = HostEntry::new(true, addr("10.0.0.2"), "api.test").unwrap();
    assert_eq!(edit::add(&mut entries, e), AddOutcome::StateChanged);
    assert_eq!(entries.len(), 4);
    assert!(entries[2].enabled);
}

#[test]
fn add_disabled_switches_existing_enabled_mapping_off() {
    let mut entries = sample();
    let e = HostEntry::new(false, addr("127.0.0.1"), "localhost").unwrap();
    let outcome = edit::add(&mut entries, e);
    assert_eq!(outcome, AddOutcome::StateChanged);
    assert!(outcome.changed());
    assert_eq!(entries.len(), 4);
    assert!(!entries[0].enabled);
    assert!(entries[1].enabled, "other address for the host is untouched");
}

#[test]
fn remove_all_for_host() {
    let mut entries = sample();
    assert_eq!(edit::remove(&mut entries, "localhost", None), 2);
    assert_eq!(entries.len(), 2);
    assert!(edit::find(&entries, "localhost").is_empty());
}

#[test]
fn remove_restricted_to_address() {
    let mut entries = sample();
    assert_eq!(edit::remove(&mut entries, "api.test", Some(&addr("10.0.0.3"))), 1);
    let left = edit::find(&entries, "api.test");
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].address, addr("10.0.0.2"));
}

#[test]
fn remove_is_case_sensitive() {
    let mut entries = sample();
    assert_eq!(edit::remove(&mut entries, "LOCALHOST", None), 0);
}

#[test]
fn set_enabled_counts_changes_only() {
    let mut entries = sample();
    assert_eq!(edit::set_enabled(&mut entries, "api.test", None, true), 1);
    assert_eq!(edit::set_enabled(&mut entries, "api.test", None, true), 0);
    assert_eq!(edit::set_enabled(&mut entries, "api.test", None, false), 2);
    assert!(edit::find(&entries, "api.test").iter().all(|e| !e.enabled));
}

#[test]
fn count_matches_host_and_address() {
    let entries = sample();
    assert_eq!(edit::count(&entries, "localhost", None), 2);
    assert_eq!(edit::count(&entries, "localhost", Some(&addr("::1"))), 1);
    assert_eq!(edit::count(&entries, "missing", None), 0);
}
