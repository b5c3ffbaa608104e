//! Platform abstraction for reading and writing the hosts file.
//!
//! The document engine never touches disk. A [`HostsStore`] supplies the raw
//! text and accepts the rendered output; privileged stores handle whatever
//! elevation the OS needs to overwrite the system file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use log::debug;

use crate::config::Config;
use crate::error::HostsError;

/// Environment override for the hosts file path (used by tests).
pub const HOSTS_FILE_ENV: &str = "HOSTEDIT_HOSTS_FILE";

/// Text source and sink for a hosts file.
pub trait HostsStore: Send + Sync {
    /// Location of the backing file.
    fn path(&self) -> &Path;
    /// Read the whole file as text.
    fn read(&self) -> Result<String, HostsError>;
    /// Replace the whole file. Must not leave a truncated file on failure.
    fn write(&self, content: &str) -> Result<(), HostsError>;
}

/// System hosts file location for this platform.
pub fn default_hosts_path() -> PathBuf {
    if cfg!(windows) {
        let root = std::env::var_os("SystemRoot").unwrap_or_else(|| r"C:\Windows".into());
        PathBuf::from(root)
            .join("System32")
            .join("drivers")
            .join("etc")
            .join("hosts")
    } else {
        PathBuf::from("/etc/hosts")
    }
}

/// Pick the store for this run.
///
/// `HOSTEDIT_HOSTS_FILE` wins, then an explicit path (`--file`), then the
/// configured path, then the system default. Elevation is only used for the
/// last two, and only when enabled in config.
pub fn default_hosts_store(config: &Config, explicit: Option<PathBuf>) -> Box<dyn HostsStore> {
    if let Ok(path) = std::env::var(HOSTS_FILE_ENV) {
        return Box::new(FileHostsStore::new(path));
    }
    if let Some(path) = explicit {
        return Box::new(FileHostsStore::new(path));
    }
    let path = config.hosts_file.clone().unwrap_or_else(default_hosts_path);
    if !config.elevate {
        return Box::new(FileHostsStore::new(path));
    }

    #[cfg(unix)]
    return Box::new(unix::PrivilegedHostsStore::new(path));

    #[cfg(windows)]
    return Box::new(windows::PrivilegedHostsStore::new(path));
}

/// Store that reads and writes a file directly, with no elevation.
#[derive(Debug, Clone)]
pub struct FileHostsStore {
    path: PathBuf,
}

impl FileHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HostsStore for FileHostsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, HostsError> {
        debug!("reading {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|e| HostsError::from_io(&self.path, e))
    }

    fn write(&self, content: &str) -> Result<(), HostsError> {
        debug!("writing {} bytes to {}", content.len(), self.path.display());
        write_atomic(&self.path, content.as_bytes())
    }
}

/// Write via a temp file in the same directory, then rename over `path`.
///
/// A symlinked `path` is resolved first so the link's target is replaced,
/// not the link. Keeps the permissions of an existing target. If the rename
/// itself fails for a reason other than permissions (e.g. `path` is a bind
/// mount), the staged content is copied over the target instead.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), HostsError> {
    let io_err = |e: std::io::Error| HostsError::from_io(path, e);

    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).map_err(io_err)?,
        _ => path.to_path_buf(),
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let perms = fs::metadata(&target).map(|m| m.permissions()).ok();

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(data).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    if let Some(perms) = perms {
        fs::set_permissions(tmp.path(), perms).map_err(io_err)?;
    }

    match tmp.persist(&target) {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == std::io::ErrorKind::PermissionDenied => Err(io_err(e.error)),
        Err(e) => {
            debug!("rename over {} failed ({}), copying instead", target.display(), e.error);
            fs::copy(e.file.path(), &target).map_err(io_err)?;
            Ok(())
        }
    }
}
