use serde::{Deserialize, Serialize};

/// Platform reported via `Sec-CH-UA-Platform`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    #[serde(rename = "Chrome OS")]
    ChromeOs,
    #[serde(rename = "Chromium OS")]
    ChromiumOs,
    #[serde(rename = "iOS")]
    Ios,
    Linux,
    #[serde(rename = "macOS")]
    MacOs,
    Windows,
    #[default]
    Unknown,
}

impl Platform {
    /// Map a decoded platform string to its variant. Anything unrecognized,
    /// including the literal "Unknown", is `Unknown`.
    pub fn from_name(s: &str) -> Self {
        match s {
            "Android" => Self::Android,
            "Chrome OS" => Self::ChromeOs,
            "Chromium OS" => Self::ChromiumOs,
            "iOS" => Self::Ios,
            "Linux" => Self::Linux,
            "macOS" => Self::MacOs,
            "Windows" => Self::Windows,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::ChromeOs => "Chrome OS",
            Self::ChromiumOs => "Chromium OS",
            Self::Ios => "iOS",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
