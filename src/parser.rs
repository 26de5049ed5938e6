use http::{HeaderMap, HeaderName};
use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::headers::{
    SEC_CH_UA, SEC_CH_UA_ARCH, SEC_CH_UA_BITNESS, SEC_CH_UA_FULL_VERSION,
    SEC_CH_UA_FULL_VERSION_LIST, SEC_CH_UA_MOBILE, SEC_CH_UA_MODEL, SEC_CH_UA_PLATFORM,
    SEC_CH_UA_PLATFORM_VERSION,
};
use crate::sfv::{self, BareItem};
use crate::types::{Brand, ClientHints, Platform};

/// Brands checked first when resolving the primary browser identity.
const PRIMARY_BRANDS: &[&str] = &[
    "Google Chrome",
    "Chrome",
    "Microsoft Edge",
    "Edge",
    "Brave Browser",
    "Brave",
    "Yandex",
    "CocCoc",
];

/// Generic engine brands, consulted only when no primary brand matched.
const SECONDARY_BRANDS: &[&str] = &["Chromium"];

/// Parses the `Sec-CH-UA*` request headers into a [`ClientHints`] record.
///
/// The brand preference lists are captured at construction and never change;
/// parsing is a pure function of the header input, so one parser can serve
/// concurrent requests.
pub struct ClientHintsParser {
    primary_brands: Vec<String>,
    secondary_brands: Vec<String>,
}

impl Default for ClientHintsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientHintsParser {
    /// Build a parser with the built-in brand preference lists.
    pub fn new() -> Self {
        Self::with_brand_preferences(
            PRIMARY_BRANDS.iter().map(|s| s.to_string()).collect(),
            SECONDARY_BRANDS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Build a parser with custom preference lists. `primary` is scanned
    /// first, in order; `secondary` only when nothing in `primary` matched.
    pub fn with_brand_preferences(primary: Vec<String>, secondary: Vec<String>) -> Self {
        Self {
            primary_brands: primary,
            secondary_brands: secondary,
        }
    }

    /// Parse the full client hint header set.
    ///
    /// Reads `Sec-CH-UA-Full-Version-List` (or else `Sec-CH-UA`) plus the
    /// platform, platform-version, mobile, arch, bitness, model and
    /// full-version headers. Absent headers produce the documented defaults;
    /// the first malformed value fails the whole parse with no partial
    /// result.
    pub fn parse(&self, headers: &HeaderMap) -> Result<ClientHints> {
        // The full-version list supersedes Sec-CH-UA when the client sends
        // both; a malformed list is a hard failure, never a fallback.
        let mut ua = header_str(headers, &SEC_CH_UA_FULL_VERSION_LIST)?;
        if ua.is_empty() {
            ua = header_str(headers, &SEC_CH_UA)?;
        }
        let brand = self.parse_brands(ua)?;

        let platform = self.parse_platform(header_str(headers, &SEC_CH_UA_PLATFORM)?)?;
        let platform_version =
            self.parse_string_item(header_str(headers, &SEC_CH_UA_PLATFORM_VERSION)?)?;
        let is_mobile = self.parse_bool_item(header_str(headers, &SEC_CH_UA_MOBILE)?)?;
        let architecture = self.parse_string_item(header_str(headers, &SEC_CH_UA_ARCH)?)?;
        let bitness = self.parse_bitness(header_str(headers, &SEC_CH_UA_BITNESS)?)?;
        let model = self.parse_string_item(header_str(headers, &SEC_CH_UA_MODEL)?)?;
        let full_version = self.parse_string_item(header_str(headers, &SEC_CH_UA_FULL_VERSION)?)?;

        Ok(ClientHints {
            brand,
            platform,
            platform_version,
            is_mobile,
            architecture,
            bitness,
            model,
            full_version,
        })
    }

    /// True iff the `Sec-CH-UA` header is present and non-empty. No decoding.
    pub fn is_supported(&self, headers: &HeaderMap) -> bool {
        headers
            .get(&SEC_CH_UA)
            .map_or(false, |value| !value.is_empty())
    }

    /// Parse a `Sec-CH-UA` / `Sec-CH-UA-Full-Version-List` value into a
    /// [`Brand`].
    ///
    /// Each string list member is a brand name with its version in the
    /// required `v` parameter; a missing or non-string `v` is malformed.
    /// Non-string members are skipped. Empty input yields an empty `Brand`.
    pub fn parse_brands(&self, text: &str) -> Result<Brand> {
        if text.is_empty() {
            return Ok(Brand::default());
        }

        let members = sfv::parse_list(text)?;
        let mut brands = IndexMap::new();
        for member in &members {
            let name = match member.value.as_str() {
                Some(name) => name,
                None => continue,
            };
            let version = member
                .params
                .get("v")
                .and_then(BareItem::as_str)
                .ok_or_else(|| Error::malformed("brand entry is missing its v parameter"))?;
            brands.insert(name.to_string(), version.to_string());
        }

        let primary = resolve_primary(&brands, &self.primary_brands)
            .or_else(|| resolve_primary(&brands, &self.secondary_brands));
        let (brand, brand_version) = match primary {
            Some((name, version)) => (name.clone(), version.clone()),
            None => (String::new(), String::new()),
        };

        Ok(Brand {
            brand,
            brand_version,
            brands,
        })
    }

    /// Parse a `Sec-CH-UA-Platform` value. Unrecognized platform strings map
    /// to `Platform::Unknown`; only a non-string item is an error.
    pub fn parse_platform(&self, text: &str) -> Result<Platform> {
        Ok(Platform::from_name(&self.parse_string_item(text)?))
    }

    /// Parse a single string item, e.g. `Sec-CH-UA-Arch` or
    /// `Sec-CH-UA-Model`. Empty input yields an empty string.
    pub fn parse_string_item(&self, text: &str) -> Result<String> {
        match sfv::parse_item(text)? {
            Some(item) => match item.value {
                BareItem::String(s) => Ok(s),
                _ => Err(Error::malformed("expected a string item")),
            },
            None => Ok(String::new()),
        }
    }

    /// Parse a single boolean item, e.g. `Sec-CH-UA-Mobile`. Empty input
    /// yields `false`.
    pub fn parse_bool_item(&self, text: &str) -> Result<bool> {
        match sfv::parse_item(text)? {
            Some(item) => item
                .value
                .as_bool()
                .ok_or_else(|| Error::malformed("expected a boolean item")),
            None => Ok(false),
        }
    }

    /// Parse a `Sec-CH-UA-Bitness` value: a string item whose content must
    /// be an integer literal. Empty input yields 0.
    pub fn parse_bitness(&self, text: &str) -> Result<i64> {
        let bitness = self.parse_string_item(text)?;
        if bitness.is_empty() {
            return Ok(0);
        }
        bitness
            .parse()
            .map_err(|_| Error::malformed(format!("bitness {:?} is not an integer", bitness)))
    }
}

/// First preference-list entry matching any observed brand wins; among
/// case-insensitive duplicates the earliest observed entry is taken, keeping
/// the result deterministic.
fn resolve_primary<'a>(
    brands: &'a IndexMap<String, String>,
    preferences: &[String],
) -> Option<(&'a String, &'a String)> {
    preferences.iter().find_map(|preferred| {
        brands
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(preferred))
    })
}

/// Header lookup: absent is the empty string, never an error. The grammar is
/// ASCII, so opaque header bytes are malformed.
fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Result<&'a str> {
    match headers.get(name) {
        Some(value) => value
            .to_str()
            .map_err(|_| Error::malformed(format!("{} value is not ASCII text", name))),
        None => Ok(""),
    }
}
