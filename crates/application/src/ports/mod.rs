mod blacklist;
mod record_store;
mod response_sink;
mod table_source;

pub use blacklist::BlacklistPort;
pub use record_store::RecordStore;
pub use response_sink::ResponseSink;
pub use table_source::{LoadedTables, TableSource};
