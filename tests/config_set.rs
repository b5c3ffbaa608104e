//! Config::set parses keys and rejects unknown ones.

use std::path::PathBuf;

use hostedit::config::Config;

#[test]
fn set_known_keys() {
    let mut config = Config::default();
    config.set("hosts_file", "/srv/hosts").unwrap();
    config.set("backup", "no").unwrap();
    config.set("backup_keep", "4").unwrap();
    config.set("elevate", "FALSE").unwrap();

    assert_eq!(config.hosts_file, Some(PathBuf::from("/srv/hosts")));
    assert!(!config.backup);
    assert_eq!(config.backup_keep, 4);
    assert!(!config.elevate);

    config.set("hosts_file", "").unwrap();
    assert_eq!(config.hosts_file, None);
}

#[test]
fn set_rejects_bad_values() {
    let mut config = Config::default();
    assert!(config.set("backup", "maybe").is_err());
    assert!(config.set("backup_keep", "-1").is_err());
    let err = config.set("colour", "red").unwrap_err();
    assert!(err.to_string().contains("unknown config key"));
}
