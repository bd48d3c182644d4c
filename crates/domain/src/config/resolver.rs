use crate::RecordType;
use serde::{Deserialize, Serialize};

/// Which requested types a stored CNAME set may answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CnameFallback {
    /// Only A and AAAA questions fall back to a stored CNAME
    #[default]
    AddressOnly,
    /// Every question falls back to a stored CNAME, whatever its type
    AnyType,
}

impl CnameFallback {
    pub fn admits(&self, requested: Option<RecordType>) -> bool {
        match self {
            CnameFallback::AddressOnly => requested.is_some_and(|rt| rt.is_address()),
            CnameFallback::AnyType => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CnameFallback::AddressOnly => "address-only",
            CnameFallback::AnyType => "any-type",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub cname_fallback: CnameFallback,
}
