use arc_swap::ArcSwap;
use hostsd_application::ports::RecordStore;
use hostsd_domain::{normalize_name, RecordSet};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

type RecordTable = FxHashMap<Arc<str>, RecordSet>;

/// Record store backed by an immutable snapshot.
///
/// Readers load the current table without locking. Every mutation builds a
/// new table and publishes it with a single pointer swap, so a lookup sees
/// either the old table or the new one, never a mix.
pub struct InMemoryRecordStore {
    table: ArcSwap<RecordTable>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(RecordTable::default()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self, name: &str, record_set: RecordSet) {
        let key: Arc<str> = Arc::from(normalize_name(name));
        self.table.rcu(|current| {
            let mut next = RecordTable::clone(current);
            next.insert(Arc::clone(&key), record_set.clone());
            next
        });
    }

    fn lookup(&self, name: &str) -> Option<RecordSet> {
        self.table.load().get(normalize_name(name).as_str()).cloned()
    }

    fn replace_all(&self, entries: Vec<(String, RecordSet)>) {
        let mut next = RecordTable::default();
        next.reserve(entries.len());
        for (name, record_set) in entries {
            next.insert(Arc::from(normalize_name(&name)), record_set);
        }
        debug!(names = next.len(), "Publishing record table");
        self.table.store(Arc::new(next));
    }

    fn len(&self) -> usize {
        self.table.load().len()
    }
}
