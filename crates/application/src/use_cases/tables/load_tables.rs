use crate::ports::{BlacklistPort, RecordStore, TableSource};
use hostsd_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub records: usize,
    pub blacklisted: usize,
}

/// Reads every static source and publishes the result in one swap.
///
/// Used for the initial load and for every reload afterwards. When reading
/// fails nothing is replaced.
pub struct LoadTablesUseCase {
    source: Arc<dyn TableSource>,
    store: Arc<dyn RecordStore>,
    blacklist: Arc<dyn BlacklistPort>,
}

impl LoadTablesUseCase {
    pub fn new(
        source: Arc<dyn TableSource>,
        store: Arc<dyn RecordStore>,
        blacklist: Arc<dyn BlacklistPort>,
    ) -> Self {
        Self {
            source,
            store,
            blacklist,
        }
    }

    pub async fn execute(&self) -> Result<LoadReport, DomainError> {
        let tables = match self.source.load().await {
            Ok(tables) => tables,
            Err(e) => {
                error!(error = %e, "Failed to read record tables, keeping current table");
                return Err(e);
            }
        };

        let blacklisted = tables.blacklist.len();
        self.store.replace_all(tables.records);
        self.blacklist.replace(tables.blacklist);

        let report = LoadReport {
            records: self.store.len(),
            blacklisted,
        };
        info!(
            records = report.records,
            blacklisted = report.blacklisted,
            "Record tables loaded"
        );
        Ok(report)
    }
}
