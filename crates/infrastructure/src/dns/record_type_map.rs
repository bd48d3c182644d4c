//! Mapping between `hostsd_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use hostsd_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
        }
    }

    /// Returns `None` for every type the store never holds.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::MX => Some(RecordType::MX),
            _ => None,
        }
    }
}
