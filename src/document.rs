//! Hosts document engine: text to ordered entries and back.
//!
//! Parsing is best-effort. Lines that are not mappings (free-form comments,
//! too few fields, a first field that is not an IP address) are dropped
//! without error, so arbitrary comments can coexist with entries. Only the
//! mappings survive a parse/serialize cycle.

use log::trace;

use crate::entry::{Address, HostEntry};
use crate::error::HostsError;

/// Parse the full text of a hosts file.
pub fn parse(text: &str) -> Vec<HostEntry> {
    parse_lines(text.lines())
}

/// Parse lines in order; entries keep line order, then token order.
pub fn parse_lines<I, S>(lines: I) -> Vec<HostEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for line in lines {
        entries.extend(parse_line(line.as_ref(), true));
    }
    entries
}

/// Parse one physical line, carrying the enabled state.
///
/// A leading `#` (on a line of two or more characters) peels off exactly one
/// `#` and re-parses the remainder as disabled. Repeated leading `#`s collapse
/// to one disabled interpretation. Inline comments are only cut on the branch
/// where the trimmed line does not start with `#`.
pub fn parse_line(line: &str, enabled: bool) -> Vec<HostEntry> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    if line.starts_with('#') {
        if line.len() >= 2 {
            return parse_line(&line[1..], false);
        }
        return Vec::new();
    }

    let mapping = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = mapping.split_whitespace();
    let (Some(first), Some(_)) = (tokens.next(), tokens.clone().next()) else {
        trace!("skipping line without host field: {line:?}");
        return Vec::new();
    };

    let address: Address = match first.parse() {
        Ok(addr) => addr,
        Err(_) => {
            trace!("skipping line with non-address field {first:?}");
            return Vec::new();
        }
    };

    tokens
        .map(|host| HostEntry {
            enabled,
            address: address.clone(),
            host: host.to_string(),
        })
        .collect()
}

/// Render entries as hosts-file text, one `\n`-terminated line each.
///
/// Every entry is validated before anything is rendered; the first invalid
/// one fails the whole call.
pub fn serialize(entries: &[HostEntry]) -> Result<String, HostsError> {
    for (index, entry) in entries.iter().enumerate() {
        entry.validate().map_err(|e| HostsError::InvalidEntry {
            index,
            reason: e.to_string(),
        })?;
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.render());
        out.push('\n');
    }
    Ok(out)
}
