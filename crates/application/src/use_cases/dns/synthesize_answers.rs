use super::Resolution;
use hostsd_domain::{Answer, AnswerData, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::warn;

/// Turns a resolution into answer records in a uniformly random order.
#[derive(Debug, Clone, Default)]
pub struct AnswerSynthesizer;

impl AnswerSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// One answer per stored value, named `name`, shuffled with an unbiased
    /// Fisher-Yates permutation. Values that cannot be encoded for their type
    /// are skipped.
    pub fn synthesize(&self, name: &str, resolution: &Resolution) -> Vec<Answer> {
        let mut values: Vec<Arc<str>> = resolution.data.to_vec();
        fastrand::shuffle(&mut values);

        let name: Arc<str> = Arc::from(name);
        values
            .into_iter()
            .filter_map(|value| {
                let data = Self::answer_data(resolution, &value)?;
                Some(Answer {
                    name: Arc::clone(&name),
                    ttl: resolution.ttl,
                    data,
                })
            })
            .collect()
    }

    fn answer_data(resolution: &Resolution, value: &Arc<str>) -> Option<AnswerData> {
        let data = match resolution.record_type {
            RecordType::A => value.parse::<Ipv4Addr>().ok().map(AnswerData::A),
            RecordType::AAAA => value.parse::<Ipv6Addr>().ok().map(AnswerData::AAAA),
            RecordType::CNAME => Some(AnswerData::CNAME(Arc::clone(value))),
            RecordType::MX => Some(AnswerData::MX {
                preference: resolution.priority,
                exchange: Arc::clone(value),
            }),
        };

        if data.is_none() {
            warn!(
                value = %value,
                record_type = %resolution.record_type,
                "Stored value is not a valid address for its record type, skipping"
            );
        }
        data
    }
}
