//! Entry model: one address-to-hostname binding and its on-disk line form.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HostsError;

/// A parsed IP address, optionally with an IPv6 zone index (`fe80::1%lo0`).
///
/// Always holds a valid address; `Display` gives the canonical text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Address {
    ip: IpAddr,
    zone: Option<String>,
}

impl Address {
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self { ip, zone: None }
    }
}

impl FromStr for Address {
    type Err = HostsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HostsError::InvalidAddress(s.to_string());
        let (ip_part, zone) = match s.split_once('%') {
            Some((ip, zone)) => (ip, Some(zone)),
            None => (s, None),
        };
        let ip: IpAddr = ip_part.parse().map_err(|_| invalid())?;
        let zone = match zone {
            None => None,
            Some(z) if ip.is_ipv6() && is_valid_zone(z) => Some(z.to_string()),
            Some(_) => return Err(invalid()),
        };
        Ok(Self { ip, zone })
    }
}

fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty() && !zone.contains(|c: char| c.is_whitespace() || c == '#' || c == '%')
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{zone}", self.ip),
            None => write!(f, "{}", self.ip),
        }
    }
}

/// One hosts-file mapping. A line naming several hosts yields one entry per host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub enabled: bool,
    pub address: Address,
    pub host: String,
}

impl HostEntry {
    /// Build an entry, rejecting hosts that would not survive a write/read cycle.
    pub fn new(enabled: bool, address: Address, host: impl Into<String>) -> Result<Self, HostsError> {
        let entry = Self {
            enabled,
            address,
            host: host.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the host invariant. Fields are public, so this can fail after a
    /// caller edit even if construction succeeded.
    pub fn validate(&self) -> Result<(), HostsError> {
        let reason = if self.host.is_empty() {
            "host is empty"
        } else if self.host.contains(char::is_whitespace) {
            "host contains whitespace"
        } else if self.host.contains('#') {
            "host contains '#'"
        } else {
            return Ok(());
        };
        Err(HostsError::InvalidHost {
            host: self.host.clone(),
            reason,
        })
    }

    /// Canonical line: `<address> <host>`, prefixed with `#` when disabled.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled {
            f.write_str("#")?;
        }
        write!(f, "{} {}", self.address, self.host)
    }
}
