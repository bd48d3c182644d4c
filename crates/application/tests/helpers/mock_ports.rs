#![allow(dead_code)]

use async_trait::async_trait;
use hostsd_application::ports::{
    BlacklistPort, LoadedTables, RecordStore, ResponseSink, TableSource,
};
use hostsd_domain::{normalize_name, Answer, Blacklist, DomainError, RecordSet, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};

// ── RecordStore ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<String, RecordSet>>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, name: &str, record_set: RecordSet) -> Self {
        self.load(name, record_set);
        self
    }
}

impl RecordStore for MockRecordStore {
    fn load(&self, name: &str, record_set: RecordSet) {
        self.records
            .write()
            .unwrap()
            .insert(normalize_name(name), record_set);
    }

    fn lookup(&self, name: &str) -> Option<RecordSet> {
        self.records
            .read()
            .unwrap()
            .get(&normalize_name(name))
            .cloned()
    }

    fn replace_all(&self, entries: Vec<(String, RecordSet)>) {
        let table = entries
            .into_iter()
            .map(|(name, set)| (normalize_name(&name), set))
            .collect();
        *self.records.write().unwrap() = table;
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

// ── BlacklistPort ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockBlacklist {
    inner: Arc<RwLock<Blacklist>>,
}

impl MockBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[&str]) -> Self {
        let mock = Self::new();
        mock.replace(Blacklist::new(entries.iter().copied()));
        mock
    }
}

impl BlacklistPort for MockBlacklist {
    fn contains(&self, ip: &IpAddr) -> bool {
        self.inner.read().unwrap().contains(ip)
    }

    fn replace(&self, blacklist: Blacklist) {
        *self.inner.write().unwrap() = blacklist;
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }
}

// ── ResponseSink ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub sends: Vec<Vec<Answer>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn send_count(&self) -> usize {
        self.sends.len()
    }

    pub fn last(&self) -> &[Answer] {
        self.sends.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn send(&mut self, answers: Vec<Answer>) -> Result<(), DomainError> {
        self.sends.push(answers);
        if self.fail {
            return Err(DomainError::IoError("socket closed".to_string()));
        }
        Ok(())
    }
}

// ── TableSource ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTableSource {
    tables: Arc<RwLock<LoadedTables>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tables(&self, tables: LoadedTables) {
        *self.tables.write().unwrap() = tables;
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }
}

#[async_trait]
impl TableSource for MockTableSource {
    async fn load(&self) -> Result<LoadedTables, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::TableRead {
                path: "./custom/hosts".to_string(),
                reason: "permission denied".to_string(),
            });
        }
        Ok(self.tables.read().unwrap().clone())
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn record_set(record_type: RecordType, data: &[&str]) -> RecordSet {
    RecordSet::new(record_type, data.iter().copied(), 0).unwrap()
}
