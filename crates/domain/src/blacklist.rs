use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;

/// Suspected-bad client addresses, kept as the literal strings of the
/// blacklist file.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<Arc<str>>,
}

impl Blacklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// IPv4-mapped IPv6 sources, as seen on dual-stack sockets, also match
    /// the plain IPv4 entry.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let canonical = ip.to_canonical();
        self.entries.contains(canonical.to_string().as_str())
            || (canonical != *ip && self.entries.contains(ip.to_string().as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
