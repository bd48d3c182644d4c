use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Also serve DNS over TCP
    #[serde(default = "default_true")]
    pub enable_tcp: bool,

    /// Add an IPv6 UDP endpoint on `::` and bind TCP dual-stack
    #[serde(default)]
    pub enable_v6: bool,

    /// Listener workers sharing the port; 0 means one per CPU
    #[serde(default)]
    pub workers: usize,

    /// Idle timeout for TCP connections
    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl ServerConfig {
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            enable_tcp: true,
            enable_v6: false,
            workers: 0,
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
