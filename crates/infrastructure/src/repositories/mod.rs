pub mod blacklist;
pub mod record_store;

pub use blacklist::InMemoryBlacklist;
pub use record_store::InMemoryRecordStore;
