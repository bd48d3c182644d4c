use serde::{Deserialize, Serialize};

/// Local files the record store and blacklist are loaded from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TablesConfig {
    #[serde(default = "default_true")]
    pub use_hosts: bool,

    #[serde(default = "default_hosts_path")]
    pub hosts_path: String,

    #[serde(default)]
    pub use_blacklist: bool,

    #[serde(default = "default_blacklist_path")]
    pub blacklist_path: String,

    /// TTL declared for host-table entries; absent or 0 means none
    #[serde(default)]
    pub hosts_ttl: Option<u32>,
}

impl TablesConfig {
    pub fn hosts_ttl(&self) -> Option<u32> {
        self.hosts_ttl.filter(|ttl| *ttl > 0)
    }
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            use_hosts: true,
            hosts_path: default_hosts_path(),
            use_blacklist: false,
            blacklist_path: default_blacklist_path(),
            hosts_ttl: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_hosts_path() -> String {
    "./custom/hosts".to_string()
}

fn default_blacklist_path() -> String {
    "./custom/blacklist".to_string()
}
