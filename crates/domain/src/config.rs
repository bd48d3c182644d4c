//! Configuration module for hostsd
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener endpoints and worker fan-out
//! - `tables`: Host table and blacklist sources
//! - `resolver`: Matching policy
//! - `logging`: Logging settings
//! - `static_records`: Record sets declared inline in the config file
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod static_records;
pub mod tables;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{CnameFallback, ResolverConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use static_records::StaticRecord;
pub use tables::TablesConfig;
