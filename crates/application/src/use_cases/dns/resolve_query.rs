use crate::ports::RecordStore;
use hostsd_domain::{unix_now_secs, CnameFallback, DnsRequest, RecordType};
use std::sync::Arc;
use tracing::debug;

/// A stored record set that answers a query, with the TTL to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Type of the stored set; differs from the question on CNAME fallback.
    pub record_type: RecordType,
    pub data: Arc<[Arc<str>]>,
    pub ttl: u32,
    pub priority: u16,
}

pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
    cname_fallback: CnameFallback,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, cname_fallback: CnameFallback) -> Self {
        Self {
            store,
            cname_fallback,
        }
    }

    pub fn execute(&self, request: &DnsRequest) -> Option<Resolution> {
        self.execute_at(request, unix_now_secs())
    }

    /// Resolve against the store as of `now_secs`.
    ///
    /// A set answers when its type equals the requested one, or when it is a
    /// CNAME and the fallback policy admits the requested type. The CNAME
    /// target is never followed.
    pub fn execute_at(&self, request: &DnsRequest, now_secs: u64) -> Option<Resolution> {
        let record_set = self.store.lookup(&request.domain)?;

        let exact = request.record_type == Some(record_set.record_type);
        let via_cname = record_set.record_type == RecordType::CNAME
            && self.cname_fallback.admits(request.record_type);

        if !exact && !via_cname {
            debug!(
                domain = %request.domain,
                requested = request.type_label(),
                stored = %record_set.record_type,
                "Stored record set does not match requested type"
            );
            return None;
        }

        Some(Resolution {
            record_type: record_set.record_type,
            ttl: record_set.remaining_ttl(now_secs),
            priority: record_set.priority,
            data: record_set.data,
        })
    }
}
