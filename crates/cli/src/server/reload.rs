use hostsd_application::use_cases::LoadTablesUseCase;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info, warn};

/// Rebuild every worker's table on SIGHUP. A worker whose reload fails keeps
/// serving its previous table.
pub async fn watch_sighup(loaders: Vec<Arc<LoadTablesUseCase>>) {
    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, "Failed to install SIGHUP handler, hot reload disabled");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        info!(workers = loaders.len(), "SIGHUP received, reloading record tables");

        let mut failed = 0usize;
        for (worker, loader) in loaders.iter().enumerate() {
            if let Err(e) = loader.execute().await {
                warn!(worker, error = %e, "Reload failed, keeping current table");
                failed += 1;
            }
        }

        info!(
            reloaded = loaders.len() - failed,
            failed,
            "Record table reload finished"
        );
    }
}
