use async_trait::async_trait;
use hostsd_domain::{Blacklist, DomainError, RecordSet};

/// Everything read from the static sources in one pass.
#[derive(Debug, Clone, Default)]
pub struct LoadedTables {
    /// Entries in load order; later ones override earlier ones.
    pub records: Vec<(String, RecordSet)>,
    pub blacklist: Blacklist,
}

#[async_trait]
pub trait TableSource: Send + Sync {
    async fn load(&self) -> Result<LoadedTables, DomainError>;
}
