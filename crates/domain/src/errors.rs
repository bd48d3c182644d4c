use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Record set of type {0} has no data")]
    EmptyRecordSet(String),

    #[error("Failed to read table {path}: {reason}")]
    TableRead { path: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
