//! write_atomic replaces content whole and leaves the target alone on failure.

mod common;

use hostedit::error::HostsError;
use hostedit::platform::{write_atomic, FileHostsStore, HostsStore};
use std::fs;

#[test]
fn replaces_existing_content() {
    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "old content that is longer than the new\n");
    write_atomic(&path, b"new\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn creates_missing_file_in_existing_dir() {
    let dir = common::temp_home();
    let path = dir.path().join("fresh-hosts");
    FileHostsStore::new(&path).write("1.2.3.4 a\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1.2.3.4 a\n");
}

#[test]
fn missing_directory_fails_without_side_effects() {
    let dir = common::temp_home();
    let path = dir.path().join("no-such-dir").join("hosts");
    let err = write_atomic(&path, b"x\n").unwrap_err();
    assert!(matches!(err, HostsError::NotFound { .. }));
    assert!(!path.exists());
}

#[test]
fn leaves_no_temp_files_behind() {
    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "a\n");
    write_atomic(&path, b"b\n").unwrap();
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("hosts")]);
}

#[cfg(unix)]
#[test]
fn keeps_permissions_of_target() {
    use std::os::unix::fs::PermissionsExt;

    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "a\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
    write_atomic(&path, b"b\n").unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}

#[cfg(unix)]
#[test]
fn symlinked_target_is_written_through() {
    let dir = common::temp_home();
    let real = dir.path().join("real_hosts");
    fs::write(&real, "1.2.3.4 old\n").unwrap();
    let link = dir.path().join("hosts");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    FileHostsStore::new(&link).write("5.6.7.8 new\n").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "5.6.7.8 new\n");
    assert_eq!(fs::read_to_string(&link).unwrap(), "5.6.7.8 new\n");
}
