use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Brand identities reported via `Sec-CH-UA` or
/// `Sec-CH-UA-Full-Version-List`.
///
/// `brands` holds every brand observed in the header, in header order. The
/// `brand`/`brand_version` pair is the primary identity chosen by
/// preference-ordered matching; both stay empty when no preference entry
/// matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Primary brand name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,
    /// Version of the primary brand.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand_version: String,
    /// Every observed brand, name to version.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub brands: IndexMap<String, String>,
}
