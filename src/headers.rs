//! Names of the user-agent client hint request headers.
//!
//! ref. https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers#user_agent_client_hints

use http::HeaderName;

/// `Sec-CH-UA`: the user agent's branding and significant version.
pub const SEC_CH_UA: HeaderName = HeaderName::from_static("sec-ch-ua");
/// `Sec-CH-UA-Arch`: the platform architecture.
pub const SEC_CH_UA_ARCH: HeaderName = HeaderName::from_static("sec-ch-ua-arch");
/// `Sec-CH-UA-Bitness`: the architecture bitness.
pub const SEC_CH_UA_BITNESS: HeaderName = HeaderName::from_static("sec-ch-ua-bitness");
/// `Sec-CH-UA-Full-Version`: the user agent's full version.
pub const SEC_CH_UA_FULL_VERSION: HeaderName = HeaderName::from_static("sec-ch-ua-full-version");
/// `Sec-CH-UA-Full-Version-List`: the full version for each brand in the
/// brand list.
pub const SEC_CH_UA_FULL_VERSION_LIST: HeaderName =
    HeaderName::from_static("sec-ch-ua-full-version-list");
/// `Sec-CH-UA-Mobile`: whether the user agent prefers a mobile experience.
pub const SEC_CH_UA_MOBILE: HeaderName = HeaderName::from_static("sec-ch-ua-mobile");
/// `Sec-CH-UA-Model`: the device model.
pub const SEC_CH_UA_MODEL: HeaderName = HeaderName::from_static("sec-ch-ua-model");
/// `Sec-CH-UA-Platform`: the platform the user agent is running on.
pub const SEC_CH_UA_PLATFORM: HeaderName = HeaderName::from_static("sec-ch-ua-platform");
/// `Sec-CH-UA-Platform-Version`: the platform version.
pub const SEC_CH_UA_PLATFORM_VERSION: HeaderName =
    HeaderName::from_static("sec-ch-ua-platform-version");

/// Every header this crate can parse, e.g. for building an `Accept-CH`
/// announcement value.
pub const ALL: [HeaderName; 9] = [
    SEC_CH_UA,
    SEC_CH_UA_ARCH,
    SEC_CH_UA_BITNESS,
    SEC_CH_UA_FULL_VERSION,
    SEC_CH_UA_FULL_VERSION_LIST,
    SEC_CH_UA_MOBILE,
    SEC_CH_UA_MODEL,
    SEC_CH_UA_PLATFORM,
    SEC_CH_UA_PLATFORM_VERSION,
];
