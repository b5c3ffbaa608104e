//! Configuration loading and path resolution.
//!
//! Supports HOSTEDIT_HOME env var override for testing.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Paths for hostedit's own data (not the hosts file itself).
#[derive(Debug, Clone)]
pub struct HostsPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub backups_dir: PathBuf,
}

impl HostsPaths {
    /// Build paths from base directory (e.g. ProjectDirs data dir or HOSTEDIT_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.toml"),
            backups_dir: base.join("backups"),
            config_dir: base,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects HOSTEDIT_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("HOSTEDIT_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("com", "hostedit", "hostedit") {
            dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".hostedit")
        };
        Self::from_base(base)
    }
}

/// config.toml structure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosts file to edit instead of the system one.
    pub hosts_file: Option<PathBuf>,
    /// Snapshot the previous file before every save.
    pub backup: bool,
    /// Snapshots to keep after a save.
    pub backup_keep: usize,
    /// Escalate privileges when the hosts file is not writable.
    pub elevate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_file: None,
            backup: true,
            backup_keep: 10,
            elevate: true,
        }
    }
}

/// Path to config.toml (respects HOSTEDIT_HOME).
pub fn config_path() -> PathBuf {
    HostsPaths::default_paths().config_file
}

impl Config {
    /// Load config from paths (with shared lock when file exists).
    pub fn load(paths: &HostsPaths) -> Result<Config> {
        if !paths.config_file.is_file() {
            return Ok(Config::default());
        }
        let mut file = fs::OpenOptions::new().read(true).open(&paths.config_file)?;
        fs2::FileExt::lock_shared(&file)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        let cfg: Config = toml::from_str(&s)
            .with_context(|| format!("parse {}", paths.config_file.display()))?;
        Ok(cfg)
    }

    /// Save config to paths (with exclusive lock). Creates parent dirs if needed.
    pub fn save(&self, paths: &HostsPaths) -> Result<()> {
        if let Some(p) = paths.config_file.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&paths.config_file)?;
        fs2::FileExt::lock_exclusive(&file)?;
        let s = toml::to_string_pretty(self)?;
        file.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Set one key from its string form (`config set`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "hosts_file" => {
                self.hosts_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "backup" => self.backup = parse_bool(value)?,
            "backup_keep" => {
                self.backup_keep = value
                    .parse()
                    .with_context(|| format!("backup_keep must be a number, got {value:?}"))?;
            }
            "elevate" => self.elevate = parse_bool(value)?,
            _ => anyhow::bail!(
                "unknown config key '{key}' (expected hosts_file, backup, backup_keep, elevate)"
            ),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("expected a boolean, got {value:?}"),
    }
}
