use crate::{DomainError, RecordSet, RecordType};
use serde::{Deserialize, Serialize};

/// Record set declared directly in the configuration file
///
/// The host table can only express single-address A/AAAA entries. Static
/// records cover the rest of the stored types:
/// - AAAA sets with several addresses
/// - CNAME aliases
/// - MX exchanges sharing one priority
///
/// Static records are loaded after the host table, so a name present in both
/// is answered from here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    /// Queried name (e.g., "mail.lan")
    pub name: String,

    /// "A", "AAAA", "CNAME" or "MX"
    pub record_type: String,

    /// Addresses for A/AAAA, target names for CNAME and MX
    pub data: Vec<String>,

    /// MX preference (ignored for other types)
    #[serde(default)]
    pub priority: Option<u16>,

    /// Declared TTL in seconds; absent means answers carry TTL 0
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl StaticRecord {
    pub fn parsed_type(&self) -> Result<RecordType, DomainError> {
        self.record_type
            .parse()
            .map_err(DomainError::InvalidRecordType)
    }

    /// Build the stored form of this record
    ///
    /// # Examples
    /// ```
    /// use hostsd_domain::config::StaticRecord;
    /// use hostsd_domain::RecordType;
    ///
    /// let record = StaticRecord {
    ///     name: "mail.lan".into(),
    ///     record_type: "mx".into(),
    ///     data: vec!["mx1.lan".into(), "mx2.lan".into()],
    ///     priority: Some(10),
    ///     ttl: Some(300),
    /// };
    /// let set = record.to_record_set(1_000).unwrap();
    /// assert_eq!(set.record_type, RecordType::MX);
    /// assert_eq!(set.priority, 10);
    /// assert_eq!(set.remaining_ttl(1_100), 200);
    /// ```
    pub fn to_record_set(&self, loaded_at: u64) -> Result<RecordSet, DomainError> {
        let record_type = self.parsed_type()?;
        let set = RecordSet::new(record_type, self.data.iter().map(String::as_str), loaded_at)
            .map_err(|_| DomainError::EmptyRecordSet(self.name.clone()))?;

        Ok(set
            .with_priority(self.priority.unwrap_or(0))
            .with_ttl(self.ttl))
    }
}
