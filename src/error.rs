//! Error types for hosts file access and entry validation.
//!
//! Malformed lines are not errors: the parser drops them. Everything here is
//! either an access failure on the backing file or a caller handing
//! `serialize` an entry that breaks the model invariant.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostsError {
    /// The hosts file does not exist.
    #[error("hosts file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The hosts file exists but cannot be read or written by this user.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure on the hosts file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A hostname token that cannot be written as a single hosts-file field.
    #[error("invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: &'static str },

    /// An entry handed to `serialize` violates the model invariant.
    #[error("invalid entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// Text that is not a valid IP address.
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    /// Privilege escalation for the write failed or was refused.
    #[error("elevation failed: {0}")]
    Elevation(String),
}

impl HostsError {
    /// Classify an I/O error against the path it happened on.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => HostsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => HostsError::PermissionDenied { path },
            _ => HostsError::Io { path, source },
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, HostsError::PermissionDenied { .. })
    }
}
