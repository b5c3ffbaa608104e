//! Verify config_path() and backups_dir resolve correctly under HOSTEDIT_HOME.

use hostedit::config::HostsPaths;

mod common;

#[test]
fn paths_resolve_under_base() {
    let dir = common::temp_home();
    let base = dir.path();
    let paths = HostsPaths::for_test(base);

    assert_eq!(paths.config_dir, base);
    assert!(paths.config_file.ends_with("config.toml"));
    assert!(paths.backups_dir.ends_with("backups"));

    assert!(paths.config_file.starts_with(base));
    assert!(paths.backups_dir.starts_with(base));
}

#[test]
fn config_path_uses_hostedit_home() {
    let dir = common::temp_home();
    let base = dir.path();

    common::with_test_env(base, || {
        let path = hostedit::config::config_path();
        assert!(path.starts_with(base), "config_path should be under HOSTEDIT_HOME");
        assert!(path.ends_with("config.toml"));
    });
}
