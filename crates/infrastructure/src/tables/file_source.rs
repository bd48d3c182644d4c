use async_trait::async_trait;
use hostsd_application::ports::{LoadedTables, TableSource};
use hostsd_domain::config::TablesConfig;
use hostsd_domain::host_table::{parse_blacklist, parse_hosts};
use hostsd_domain::{unix_now_secs, Blacklist, DomainError, RecordSet, StaticRecord};
use tracing::{debug, info};

/// Reads the host table, the blacklist and the configured static records.
///
/// Host-table entries come first and static records after them, so a name
/// declared in both resolves to the static record.
pub struct FileTableSource {
    tables: TablesConfig,
    static_records: Vec<StaticRecord>,
}

impl FileTableSource {
    pub fn new(tables: TablesConfig, static_records: Vec<StaticRecord>) -> Self {
        Self {
            tables,
            static_records,
        }
    }

    async fn read(path: &str) -> Result<String, DomainError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::TableRead {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    async fn load_hosts(
        &self,
        loaded_at: u64,
        records: &mut Vec<(String, RecordSet)>,
    ) -> Result<(), DomainError> {
        let contents = Self::read(&self.tables.hosts_path).await?;
        let ttl = self.tables.hosts_ttl();

        let mut entries = 0usize;
        for entry in parse_hosts(&contents) {
            let record_set =
                RecordSet::new(entry.record_type(), [entry.address.as_str()], loaded_at)?
                    .with_ttl(ttl);
            for name in &entry.names {
                debug!(name = %name, address = %entry.address, "Loaded host entry");
                records.push((name.clone(), record_set.clone()));
            }
            entries += 1;
        }

        info!(
            path = %self.tables.hosts_path,
            entries,
            names = records.len(),
            "Host table loaded"
        );
        Ok(())
    }

    fn load_static(
        &self,
        loaded_at: u64,
        records: &mut Vec<(String, RecordSet)>,
    ) -> Result<(), DomainError> {
        for record in &self.static_records {
            let record_set = record.to_record_set(loaded_at)?;
            debug!(
                name = %record.name,
                record_type = %record_set.record_type,
                values = record_set.len(),
                "Loaded static record"
            );
            records.push((record.name.clone(), record_set));
        }

        if !self.static_records.is_empty() {
            info!(count = self.static_records.len(), "Static records loaded");
        }
        Ok(())
    }

    async fn load_blacklist(&self) -> Result<Blacklist, DomainError> {
        let contents = Self::read(&self.tables.blacklist_path).await?;
        let blacklist = Blacklist::new(parse_blacklist(&contents));
        info!(
            path = %self.tables.blacklist_path,
            entries = blacklist.len(),
            "Blacklist loaded"
        );
        Ok(blacklist)
    }
}

#[async_trait]
impl TableSource for FileTableSource {
    async fn load(&self) -> Result<LoadedTables, DomainError> {
        let loaded_at = unix_now_secs();
        let mut records = Vec::new();

        if self.tables.use_hosts {
            self.load_hosts(loaded_at, &mut records).await?;
        }
        self.load_static(loaded_at, &mut records)?;

        let blacklist = if self.tables.use_blacklist {
            self.load_blacklist().await?
        } else {
            Blacklist::default()
        };

        Ok(LoadedTables { records, blacklist })
    }
}
