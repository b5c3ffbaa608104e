//! Windows hosts store: grants the current user access, then retries.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use super::{FileHostsStore, HostsStore};
use crate::error::HostsError;

/// Writes directly; on access denied, clears the read-only flag and grants
/// the current user full control with `icacls`, then retries once.
pub struct PrivilegedHostsStore {
    inner: FileHostsStore,
}

impl PrivilegedHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FileHostsStore::new(path),
        }
    }

    fn grant_access(&self) -> Result<(), HostsError> {
        let path = self.path();
        let user = match (std::env::var("USERDOMAIN"), std::env::var("USERNAME")) {
            (Ok(domain), Ok(name)) => format!("{domain}\\{name}"),
            (Err(_), Ok(name)) => name,
            _ => return Err(HostsError::Elevation("cannot determine current user".into())),
        };

        info!("granting {user} full control of {}", path.display());
        let status = Command::new("icacls")
            .arg(path)
            .args(["/grant", &format!("{user}:F")])
            .status()
            .map_err(|e| HostsError::Elevation(format!("run icacls: {e}")))?;
        if !status.success() {
            return Err(HostsError::Elevation(format!("icacls exited with {status}")));
        }

        let mut perms = std::fs::metadata(path)
            .map_err(|e| HostsError::from_io(path, e))?
            .permissions();
        if perms.readonly() {
            perms.set_readonly(false);
            std::fs::set_permissions(path, perms).map_err(|e| HostsError::from_io(path, e))?;
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
            Err(e) if e.is_permission_denied() => {
                self.grant_access()?;
                self.inner.write(content)
            }
            other => other,
        }
    }
}
