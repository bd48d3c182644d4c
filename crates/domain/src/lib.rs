//! hostsd Domain Layer
pub mod answer;
pub mod blacklist;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod host_table;

pub use answer::{Answer, AnswerData};
pub use blacklist::Blacklist;
pub use config::{CliOverrides, CnameFallback, Config, ConfigError, StaticRecord};
pub use dns_record::{unix_now_secs, RecordSet, RecordType};
pub use dns_request::{normalize_name, DnsRequest};
pub use errors::DomainError;
pub use host_table::HostEntry;
