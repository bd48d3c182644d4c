use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::normalize_name;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::static_records::StaticRecord;
use super::tables::TablesConfig;

/// Main configuration structure for hostsd
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, endpoints, workers)
    #[serde(default)]
    pub server: ServerConfig,

    /// Host table and blacklist sources
    #[serde(default)]
    pub tables: TablesConfig,

    /// Query matching policy
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record sets declared inline
    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hostsd.toml in current directory
    /// 3. /etc/hostsd/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("hostsd.toml").exists() {
            Self::from_file("hostsd.toml")?
        } else if std::path::Path::new("/etc/hostsd/config.toml").exists() {
            Self::from_file("/etc/hostsd/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        if self.tables.use_hosts && self.tables.hosts_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "use_hosts is enabled but hosts_path is empty".to_string(),
            ));
        }

        if self.tables.use_blacklist && self.tables.blacklist_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "use_blacklist is enabled but blacklist_path is empty".to_string(),
            ));
        }

        for record in &self.records {
            if normalize_name(&record.name).is_empty() {
                return Err(ConfigError::Validation(
                    "Static record has an empty name".to_string(),
                ));
            }
            record
                .parsed_type()
                .map_err(|e| ConfigError::Validation(format!("Record '{}': {}", record.name, e)))?;
            if record.data.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Record '{}' has no data",
                    record.name
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}
