//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for use as HOSTEDIT_HOME.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostedit_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Write a hosts file with `content` inside `dir`.
pub fn hosts_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}

/// `hostedit` binary with HOSTEDIT_HOME and HOSTEDIT_HOSTS_FILE pointed at `home`.
pub fn hostedit(home: &Path, hosts: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("hostedit").unwrap();
    cmd.env("HOSTEDIT_HOME", home)
        .env("HOSTEDIT_HOSTS_FILE", hosts)
        .env_remove("RUST_LOG");
    cmd
}

/// Run a closure with HOSTEDIT_HOME set to the given path.
pub fn with_test_env<F, R>(home: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os("HOSTEDIT_HOME");
    std::env::set_var("HOSTEDIT_HOME", home);
    let r = f();
    match prev {
        Some(v) => std::env::set_var("HOSTEDIT_HOME", v),
        None => std::env::remove_var("HOSTEDIT_HOME"),
    }
    r
}
