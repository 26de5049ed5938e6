use serde::{Deserialize, Serialize};

use super::{Brand, Platform};

/// Typed result of parsing the `Sec-CH-UA*` request headers.
///
/// Every field's default is the "header absent" value: empty strings, empty
/// brand mapping, `Platform::Unknown`, `false`, `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHints {
    /// Brands from `Sec-CH-UA-Full-Version-List`, or `Sec-CH-UA` when the
    /// full list is absent.
    #[serde(flatten)]
    pub brand: Brand,
    /// Platform from `Sec-CH-UA-Platform`.
    pub platform: Platform,
    /// Platform version from `Sec-CH-UA-Platform-Version`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform_version: String,
    /// Mobile flag from `Sec-CH-UA-Mobile` (`?1` is mobile).
    pub is_mobile: bool,
    /// Architecture from `Sec-CH-UA-Arch`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub architecture: String,
    /// Bitness from `Sec-CH-UA-Bitness`, e.g. 64.
    pub bitness: i64,
    /// Device model from `Sec-CH-UA-Model`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    /// Full version from `Sec-CH-UA-Full-Version`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_version: String,
}
