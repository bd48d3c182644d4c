use crate::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// One answer record, independent of any wire library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: AnswerData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(Arc<str>),
    MX { preference: u16, exchange: Arc<str> },
}

impl AnswerData {
    pub fn record_type(&self) -> RecordType {
        match self {
            AnswerData::A(_) => RecordType::A,
            AnswerData::AAAA(_) => RecordType::AAAA,
            AnswerData::CNAME(_) => RecordType::CNAME,
            AnswerData::MX { .. } => RecordType::MX,
        }
    }

    /// Textual value as it appears in the stored record set.
    pub fn value(&self) -> String {
        match self {
            AnswerData::A(ip) => ip.to_string(),
            AnswerData::AAAA(ip) => ip.to_string(),
            AnswerData::CNAME(target) => target.to_string(),
            AnswerData::MX { exchange, .. } => exchange.to_string(),
        }
    }
}
