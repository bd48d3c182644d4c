//! Line parsing for the host table and blacklist files.
//!
//! Both formats are newline-delimited. Blank lines and lines starting with
//! `#` are skipped; nothing else is validated here.

use crate::RecordType;

/// One usable line of a host table: an address and the names it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub address: String,
    pub names: Vec<String>,
}

impl HostEntry {
    /// AAAA for addresses written in IPv6 notation, A otherwise.
    pub fn record_type(&self) -> RecordType {
        if self.address.contains(':') {
            RecordType::AAAA
        } else {
            RecordType::A
        }
    }
}

fn content_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Parse `<ip> <name> [aliases...]` lines. Fields are split on any run of
/// whitespace; a field starting with `#` ends the line. Lines without a name
/// are dropped.
pub fn parse_hosts(contents: &str) -> Vec<HostEntry> {
    content_lines(contents)
        .filter_map(|line| {
            let mut fields = line
                .split_whitespace()
                .take_while(|field| !field.starts_with('#'));
            let address = fields.next()?.to_string();
            let names: Vec<String> = fields.map(str::to_string).collect();
            if names.is_empty() {
                return None;
            }
            Some(HostEntry { address, names })
        })
        .collect()
}

/// One address string per line.
pub fn parse_blacklist(contents: &str) -> Vec<String> {
    content_lines(contents).map(str::to_string).collect()
}
