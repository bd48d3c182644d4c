use futures::future::try_join_all;
use hostsd_application::ports::BlacklistPort;
use hostsd_application::use_cases::{
    HandleDnsQueryUseCase, LoadTablesUseCase, ResolveQueryUseCase,
};
use hostsd_domain::Config;
use hostsd_infrastructure::dns::DnsServerHandler;
use hostsd_infrastructure::repositories::{InMemoryBlacklist, InMemoryRecordStore};
use hostsd_infrastructure::tables::FileTableSource;
use std::sync::Arc;
use tracing::info;

/// Everything one listener worker owns. Workers share no state.
pub struct WorkerServices {
    pub id: usize,
    pub load_tables: Arc<LoadTablesUseCase>,
    pub handler: DnsServerHandler,
}

impl WorkerServices {
    pub fn new(id: usize, config: &Config) -> Self {
        let store = Arc::new(InMemoryRecordStore::new());
        let blacklist = Arc::new(InMemoryBlacklist::default());
        let source = Arc::new(FileTableSource::new(
            config.tables.clone(),
            config.records.clone(),
        ));

        let load_tables = Arc::new(LoadTablesUseCase::new(
            source,
            store.clone(),
            blacklist.clone(),
        ));

        let resolver = Arc::new(ResolveQueryUseCase::new(
            store,
            config.resolver.cname_fallback,
        ));
        let mut handle_query = HandleDnsQueryUseCase::new(resolver);
        if config.tables.use_blacklist {
            handle_query = handle_query.with_blacklist(blacklist as Arc<dyn BlacklistPort>);
        }

        Self {
            id,
            load_tables,
            handler: DnsServerHandler::new(Arc::new(handle_query)),
        }
    }
}

/// Build `count` workers and fill each one's table. Any read failure is
/// returned, since a worker without its table must not start.
pub async fn build_workers(config: &Config, count: usize) -> anyhow::Result<Vec<WorkerServices>> {
    let workers: Vec<WorkerServices> = (0..count)
        .map(|id| WorkerServices::new(id, config))
        .collect();

    let reports = try_join_all(workers.iter().map(|w| w.load_tables.execute())).await?;

    if let Some(report) = reports.first() {
        info!(
            workers = workers.len(),
            records = report.records,
            blacklisted = report.blacklisted,
            "Worker tables populated"
        );
    }

    Ok(workers)
}

pub fn handlers(workers: &[WorkerServices]) -> Vec<(usize, DnsServerHandler)> {
    workers.iter().map(|w| (w.id, w.handler.clone())).collect()
}

pub fn table_loaders(workers: &[WorkerServices]) -> Vec<Arc<LoadTablesUseCase>> {
    workers.iter().map(|w| w.load_tables.clone()).collect()
}
