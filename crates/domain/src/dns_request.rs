use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// First question of an inbound query, already normalized.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    /// `None` when the question asks for a type the server never stores.
    pub record_type: Option<RecordType>,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: impl Into<Option<RecordType>>,
        client_ip: IpAddr,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            client_ip,
        }
    }

    pub fn type_label(&self) -> &'static str {
        self.record_type
            .as_ref()
            .map(RecordType::as_str)
            .unwrap_or("OTHER")
    }
}

/// Canonical form used as the record store key: ASCII-lowercased, without
/// surrounding whitespace or the trailing root dot.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
