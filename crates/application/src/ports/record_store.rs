use hostsd_domain::RecordSet;

/// Name → record set table consulted by every query.
///
/// Implementations normalize names identically on every operation and make
/// each mutation atomic for concurrent readers.
pub trait RecordStore: Send + Sync {
    /// Insert or replace the entry for `name`.
    fn load(&self, name: &str, record_set: RecordSet);

    fn lookup(&self, name: &str) -> Option<RecordSet>;

    /// Swap in a complete table. Later entries win over earlier ones with
    /// the same name.
    fn replace_all(&self, entries: Vec<(String, RecordSet)>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
