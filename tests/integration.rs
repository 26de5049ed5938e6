use client_hints::headers::{
    SEC_CH_UA, SEC_CH_UA_ARCH, SEC_CH_UA_BITNESS, SEC_CH_UA_FULL_VERSION,
    SEC_CH_UA_FULL_VERSION_LIST, SEC_CH_UA_MOBILE, SEC_CH_UA_MODEL, SEC_CH_UA_PLATFORM,
    SEC_CH_UA_PLATFORM_VERSION,
};
use client_hints::{Brand, ClientHints, ClientHintsParser, Error, Platform};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

fn header_map(entries: &[(&HeaderName, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in entries {
        headers.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    headers
}

fn brands(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_full_header_set() {
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84", "Google Chrome";v="84""#),
        (&SEC_CH_UA_MOBILE, "?0"),
        (&SEC_CH_UA_PLATFORM, r#""macOS""#),
        (&SEC_CH_UA_PLATFORM_VERSION, r#""11""#),
        (&SEC_CH_UA_ARCH, r#""ARM""#),
        (&SEC_CH_UA_BITNESS, r#""64""#),
        (&SEC_CH_UA_MODEL, r#""Pixel 6""#),
        (&SEC_CH_UA_FULL_VERSION, r#""123456""#),
    ]);

    let hints = ClientHintsParser::new().parse(&headers).unwrap();
    assert_eq!(
        hints,
        ClientHints {
            brand: Brand {
                brand: "Google Chrome".to_string(),
                brand_version: "84".to_string(),
                brands: brands(&[("Chromium", "84"), ("Google Chrome", "84")]),
            },
            platform: Platform::MacOs,
            platform_version: "11".to_string(),
            is_mobile: false,
            architecture: "ARM".to_string(),
            bitness: 64,
            model: "Pixel 6".to_string(),
            full_version: "123456".to_string(),
        }
    );
}

#[test]
fn parse_prefers_full_version_list() {
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84", "Google Chrome";v="84""#),
        (
            &SEC_CH_UA_FULL_VERSION_LIST,
            r#""Microsoft Edge"; v="92.0.902.73", "Chromium"; v="92.0.4515.131", "?Not:Your Browser"; v="3.1.2.0""#,
        ),
        (&SEC_CH_UA_MOBILE, "?0"),
        (&SEC_CH_UA_PLATFORM, r#""macOS""#),
    ]);

    let hints = ClientHintsParser::new().parse(&headers).unwrap();
    assert_eq!(hints.brand.brand, "Microsoft Edge");
    assert_eq!(hints.brand.brand_version, "92.0.902.73");
    assert_eq!(
        hints.brand.brands,
        brands(&[
            ("Microsoft Edge", "92.0.902.73"),
            ("Chromium", "92.0.4515.131"),
            ("?Not:Your Browser", "3.1.2.0"),
        ])
    );
}

#[test]
fn parse_empty_headers_yields_defaults() {
    let hints = ClientHintsParser::new().parse(&HeaderMap::new()).unwrap();
    assert_eq!(hints, ClientHints::default());
}

#[test]
fn parse_mobile_flag() {
    let headers = header_map(&[(&SEC_CH_UA_MOBILE, "?1")]);
    let hints = ClientHintsParser::new().parse(&headers).unwrap();
    assert!(hints.is_mobile);
}

#[test]
fn parse_fails_on_malformed_platform() {
    // Unquoted platform value is a bare token, not a string item.
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84", "Google Chrome";v="84""#),
        (&SEC_CH_UA_MOBILE, "?0"),
        (&SEC_CH_UA_PLATFORM, "macOS"),
    ]);

    let err = ClientHintsParser::new().parse(&headers).unwrap_err();
    assert!(matches!(err, Error::MalformedField { .. }));
}

#[test]
fn parse_malformed_full_version_list_is_a_hard_failure() {
    // A valid Sec-CH-UA does not rescue a malformed full-version list.
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84""#),
        (&SEC_CH_UA_FULL_VERSION_LIST, r#""Microsoft Edge"; v="92.0."#),
    ]);

    assert!(ClientHintsParser::new().parse(&headers).is_err());
}

#[test]
fn parse_is_idempotent() {
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84", "Google Chrome";v="84""#),
        (&SEC_CH_UA_PLATFORM, r#""Windows""#),
        (&SEC_CH_UA_BITNESS, r#""32""#),
    ]);

    let parser = ClientHintsParser::new();
    let first = parser.parse(&headers).unwrap();
    let second = parser.parse(&headers).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// parse_brands
// ---------------------------------------------------------------------------

#[test]
fn brand_precedence_cases() {
    let cases: &[(&str, &str, &str)] = &[
        (
            r#""Chrome"; v="74", ";Not)Your=Browser"; v="13""#,
            "Chrome",
            "74",
        ),
        (
            r#""Chrome"; v="74.0.3729.0", "Chromium"; v="74.0.3729.0", "?Not:Your Browser"; v="13.0.1.0""#,
            "Chrome",
            "74.0.3729.0",
        ),
        (
            r#""Chromium";v="84", "Google Chrome";v="84""#,
            "Google Chrome",
            "84",
        ),
        (
            r#""Microsoft Edge"; v="92.0.902.73", "Chromium"; v="92.0.4515.131", "?Not:Your Browser"; v="3.1.2.0""#,
            "Microsoft Edge",
            "92.0.902.73",
        ),
        (
            r#"" Not A;Brand";v="99", "Chromium";v="96""#,
            "Chromium",
            "96",
        ),
    ];

    let parser = ClientHintsParser::new();
    for (value, name, version) in cases {
        let brand = parser.parse_brands(value).unwrap();
        assert_eq!(brand.brand, *name, "input: {}", value);
        assert_eq!(brand.brand_version, *version, "input: {}", value);
    }
}

#[test]
fn brands_without_preference_match_keep_the_mapping() {
    let parser = ClientHintsParser::new();
    let brand = parser.parse_brands(r#"" Not A;Brand";v="99""#).unwrap();
    assert_eq!(brand.brand, "");
    assert_eq!(brand.brand_version, "");
    assert_eq!(brand.brands, brands(&[(" Not A;Brand", "99")]));
}

#[test]
fn empty_brand_header_is_empty_brand() {
    let parser = ClientHintsParser::new();
    assert_eq!(parser.parse_brands("").unwrap(), Brand::default());
}

#[test]
fn unterminated_brand_list_fails() {
    let parser = ClientHintsParser::new();
    assert!(parser.parse_brands(r#""Microsoft Edge"; v="92.0."#).is_err());
}

// ---------------------------------------------------------------------------
// parse_platform
// ---------------------------------------------------------------------------

#[test]
fn platform_literals() {
    let cases: &[(&str, Platform)] = &[
        (r#""Android""#, Platform::Android),
        (r#""Chrome OS""#, Platform::ChromeOs),
        (r#""Chromium OS""#, Platform::ChromiumOs),
        (r#""iOS""#, Platform::Ios),
        (r#""Linux""#, Platform::Linux),
        (r#""macOS""#, Platform::MacOs),
        (r#""Windows""#, Platform::Windows),
        (r#""Unknown""#, Platform::Unknown),
        // A valid string with an unrecognized value is still a success.
        (r#""Cat""#, Platform::Unknown),
        ("", Platform::Unknown),
    ];

    let parser = ClientHintsParser::new();
    for (value, platform) in cases {
        assert_eq!(
            parser.parse_platform(value).unwrap(),
            *platform,
            "input: {}",
            value
        );
    }
}

#[test]
fn malformed_platform_values_fail() {
    let parser = ClientHintsParser::new();
    assert!(parser.parse_platform(r#""Unk"#).is_err());
    assert!(parser.parse_platform("?0").is_err());
}

// ---------------------------------------------------------------------------
// item parsing
// ---------------------------------------------------------------------------

#[test]
fn string_item_cases() {
    let parser = ClientHintsParser::new();
    assert_eq!(parser.parse_string_item(r#""aaa""#).unwrap(), "aaa");
    assert_eq!(parser.parse_string_item(r#""""#).unwrap(), "");
    assert_eq!(parser.parse_string_item("").unwrap(), "");
    assert!(parser.parse_string_item("aaaa").is_err());
    assert!(parser.parse_string_item("?1").is_err());
}

#[test]
fn bool_item_cases() {
    let parser = ClientHintsParser::new();
    assert!(!parser.parse_bool_item("?0").unwrap());
    assert!(parser.parse_bool_item("?1").unwrap());
    assert!(!parser.parse_bool_item("").unwrap());
    assert!(parser.parse_bool_item("???1").is_err());
    assert!(parser.parse_bool_item(r#""true""#).is_err());
}

#[test]
fn bitness_cases() {
    let parser = ClientHintsParser::new();
    assert_eq!(parser.parse_bitness(r#""64""#).unwrap(), 64);
    assert_eq!(parser.parse_bitness(r#""32""#).unwrap(), 32);
    assert_eq!(parser.parse_bitness("").unwrap(), 0);
    assert!(parser.parse_bitness(r#""x86""#).is_err());
    // A bare integer item has the wrong type; bitness is a quoted string.
    assert!(parser.parse_bitness("64").is_err());
}

// ---------------------------------------------------------------------------
// is_supported
// ---------------------------------------------------------------------------

#[test]
fn is_supported_requires_a_non_empty_brand_header() {
    let parser = ClientHintsParser::new();

    let headers = header_map(&[(&SEC_CH_UA, r#""Chrome"; v="74", ";Not)Your=Browser"; v="13""#)]);
    assert!(parser.is_supported(&headers));

    assert!(!parser.is_supported(&HeaderMap::new()));

    let empty_value = header_map(&[(&SEC_CH_UA, "")]);
    assert!(!parser.is_supported(&empty_value));
}

// ---------------------------------------------------------------------------
// serde shape
// ---------------------------------------------------------------------------

#[test]
fn default_record_serializes_to_required_fields_only() {
    let json = serde_json::to_value(ClientHints::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "platform": "Unknown",
            "is_mobile": false,
            "bitness": 0,
        })
    );
}

#[test]
fn full_record_serializes_with_wire_literals() {
    let headers = header_map(&[
        (&SEC_CH_UA, r#""Chromium";v="84", "Google Chrome";v="84""#),
        (&SEC_CH_UA_PLATFORM, r#""macOS""#),
        (&SEC_CH_UA_MOBILE, "?1"),
    ]);
    let hints = ClientHintsParser::new().parse(&headers).unwrap();

    let json = serde_json::to_value(&hints).unwrap();
    assert_eq!(json["platform"], "macOS");
    assert_eq!(json["brand"], "Google Chrome");
    assert_eq!(json["brands"]["Chromium"], "84");
    assert_eq!(json["is_mobile"], true);

    let roundtrip: ClientHints = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, hints);
}
