use std::fmt;
use std::str::FromStr;

use crate::UgError;
use crate::params::ParamValue;

/// A tab category recognized by the upstream search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabType {
    Video,
    Tabs,
    Chords,
    Bass,
    GuitarPro,
    Power,
    Drums,
    Ukulele,
}

impl TabType {
    pub const ALL: [TabType; 8] = [
        TabType::Video,
        TabType::Tabs,
        TabType::Chords,
        TabType::Bass,
        TabType::GuitarPro,
        TabType::Power,
        TabType::Drums,
        TabType::Ukulele,
    ];

    /// Numeric code the search endpoint filters on.
    pub const fn code(self) -> u16 {
        match self {
            TabType::Video => 100,
            TabType::Tabs => 200,
            TabType::Chords => 300,
            TabType::Bass => 400,
            TabType::GuitarPro => 500,
            TabType::Power => 600,
            TabType::Drums => 700,
            TabType::Ukulele => 800,
        }
    }

    /// Display name as the site labels it.
    pub const fn as_str(self) -> &'static str {
        match self {
            TabType::Video => "Video",
            TabType::Tabs => "Tabs",
            TabType::Chords => "Chords",
            TabType::Bass => "Bass Tabs",
            TabType::GuitarPro => "Guitar Pro",
            TabType::Power => "Power",
            TabType::Drums => "Drum Tabs",
            TabType::Ukulele => "Ukulele Chords",
        }
    }

    fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    fn from_alias(alias: &str) -> Option<Self> {
        let t = match alias {
            "video" | "videos" => TabType::Video,
            "tab" | "tabs" => TabType::Tabs,
            "chord" | "chords" => TabType::Chords,
            "bass" | "bass tab" | "bass tabs" | "bass_tabs" => TabType::Bass,
            "pro" | "guitar pro" | "guitar_pro" | "guitarpro" => TabType::GuitarPro,
            "power" | "power tab" | "power tabs" => TabType::Power,
            "drum" | "drums" | "drum tab" | "drum tabs" | "drum_tabs" => TabType::Drums,
            "ukulele" | "uke" | "ukulele chords" | "ukulele_chords" => TabType::Ukulele,
            _ => return None,
        };
        Some(t)
    }
}

impl fmt::Display for TabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabType {
    type Err = UgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(code) = token.parse::<u16>() {
            return Self::from_code(code).ok_or_else(|| UgError::InvalidType(s.to_string()));
        }
        Self::from_alias(&token.to_lowercase()).ok_or_else(|| UgError::InvalidType(s.to_string()))
    }
}

/// Checks a type token against the supported set.
///
/// Names and aliases are matched case-insensitively (`"Chords"`, `"chord"`),
/// numeric codes must be one of the known codes (`"300"`).
///
/// # Errors
///
/// Returns [`UgError::InvalidType`] for any other token.
pub fn validate_type(token: &str) -> Result<TabType, UgError> {
    token.parse()
}

/// The `type` search parameter: no filter, one category, or several.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    Any,
    One(TabType),
    Many(Vec<TabType>),
}

impl TypeFilter {
    /// Validates a raw `type` value: a scalar is one token (empty means no
    /// filter), a sequence has each element validated on its own.
    ///
    /// # Errors
    ///
    /// Returns [`UgError::InvalidType`] for an unsupported token or a nested sequence.
    pub fn from_param(value: &ParamValue) -> Result<Self, UgError> {
        match value {
            ParamValue::Scalar(s) if s.is_empty() => Ok(Self::Any),
            ParamValue::Scalar(s) => validate_type(s).map(Self::One),
            ParamValue::Sequence(items) => items
                .iter()
                .map(|item| match item {
                    ParamValue::Scalar(s) => validate_type(s),
                    ParamValue::Sequence(_) => Err(UgError::InvalidType(format!("{item:?}"))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
        }
    }

    /// Upstream form: the empty string, a code, or a list of codes.
    pub fn to_param(&self) -> ParamValue {
        match self {
            Self::Any => ParamValue::Scalar(String::new()),
            Self::One(t) => ParamValue::Scalar(t.code().to_string()),
            Self::Many(ts) => {
                ParamValue::Sequence(ts.iter().map(|t| t.code().to_string().into()).collect())
            }
        }
    }
}

impl From<TabType> for TypeFilter {
    fn from(t: TabType) -> Self {
        Self::One(t)
    }
}

impl From<Vec<TabType>> for TypeFilter {
    fn from(ts: Vec<TabType>) -> Self {
        Self::Many(ts)
    }
}
