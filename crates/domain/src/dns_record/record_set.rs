use super::RecordType;
use crate::DomainError;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in whole seconds since the unix epoch.
pub fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Stored answer data for one queried name.
///
/// `data` is never empty; `priority` only matters for MX sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub record_type: RecordType,
    pub data: Arc<[Arc<str>]>,
    pub priority: u16,
    pub ttl: Option<u32>,
    pub loaded_at: u64,
}

impl RecordSet {
    pub fn new<I, S>(record_type: RecordType, data: I, loaded_at: u64) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let data: Arc<[Arc<str>]> = data.into_iter().map(Into::into).collect();
        if data.is_empty() {
            return Err(DomainError::EmptyRecordSet(record_type.to_string()));
        }

        Ok(Self {
            record_type,
            data,
            priority: 0,
            ttl: None,
            loaded_at,
        })
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_ttl(mut self, ttl: Option<u32>) -> Self {
        self.ttl = ttl;
        self
    }

    /// TTL left at `now_secs`: the declared TTL minus the time since load,
    /// floored at zero. Sets loaded without a TTL always report 0.
    pub fn remaining_ttl(&self, now_secs: u64) -> u32 {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let elapsed = now_secs.saturating_sub(self.loaded_at);
        u64::from(ttl).saturating_sub(elapsed) as u32
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
