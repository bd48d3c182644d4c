pub mod record_type_map;
pub mod response;
pub mod server;

pub use record_type_map::RecordTypeMapper;
pub use response::{answer_to_record, HickoryResponseSink};
pub use server::DnsServerHandler;
