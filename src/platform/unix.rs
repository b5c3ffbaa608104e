//! Unix (macOS, Linux) hosts store with pkexec elevation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use super::{FileHostsStore, HostsStore};
use crate::error::HostsError;

fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Writes directly when allowed, otherwise copies the staged file into place
/// with `pkexec cp`.
pub struct PrivilegedHostsStore {
    inner: FileHostsStore,
}

impl PrivilegedHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FileHostsStore::new(path),
        }
    }

    fn write_elevated(&self, content: &str) -> Result<(), HostsError> {
        let mut staged = tempfile::Builder::new()
            .prefix("hostedit-")
            .tempfile()
            .map_err(|e| HostsError::Elevation(format!("stage hosts content: {e}")))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| HostsError::Elevation(format!("stage hosts content: {e}")))?;

        info!("escalating with pkexec to write {}", self.path().display());
        let status = Command::new("pkexec")
            .arg("cp")
            .arg(staged.path())
            .arg(self.path())
            .status()
            .map_err(|e| HostsError::Elevation(format!("run pkexec: {e}")))?;
        if !status.success() {
            return Err(HostsError::Elevation(format!("pkexec cp exited with {status}")));
        }
        Ok(())
    }
}

impl HostsStore for PrivilegedHostsStore {
    fn path(&self) -> &Path {
        self.inner.path()
    }

    fn read(&self) -> Result<String, HostsError> {
        self.inner.read()
    }

    fn write(&self, content: &str) -> Result<(), HostsError> {
        match self.inner.write(content) {
            Err(e) if e.is_permission_denied() && !is_root() => self.write_elevated(content),
            other => other,
        }
    }
}
