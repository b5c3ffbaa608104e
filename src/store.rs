//! Data store operations and directory layout.

use anyhow::Result;

use crate::config::{Config, HostsPaths};

/// Ensure all hostedit directories exist.
pub fn ensure_dirs(paths: &HostsPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.backups_dir)?;
    if let Some(p) = paths.config_file.parent() {
        std::fs::create_dir_all(p)?;
    }
    Ok(())
}

/// Load config from store.
pub fn load_config(paths: &HostsPaths) -> Result<Config> {
    Config::load(paths)
}

/// Save config to store.
pub fn save_config(paths: &HostsPaths, config: &Config) -> Result<()> {
    Config::save(config, paths)
}
