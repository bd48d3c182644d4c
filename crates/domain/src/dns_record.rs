mod record_set;
mod record_type;

pub use record_set::{unix_now_secs, RecordSet};
pub use record_type::RecordType;
