//! Request parameters shared by every media type: store country, response
//! language, API version and the explicit-content flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ItunesError;

/// ISO 3166-1 alpha-2 store code, stored uppercase.
///
/// Only the shape is checked (two ASCII letters); whether Apple runs a store
/// for the code is up to the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country([u8; 2]);

impl Country {
    pub const US: Country = Country(*b"US");
    pub const GB: Country = Country(*b"GB");
    pub const CA: Country = Country(*b"CA");
    pub const AU: Country = Country(*b"AU");
    pub const NG: Country = Country(*b"NG");
    pub const JP: Country = Country(*b"JP");
    pub const DE: Country = Country(*b"DE");
    pub const FR: Country = Country(*b"FR");
    pub const IN: Country = Country(*b"IN");

    pub fn new(code: &str) -> Result<Self, ItunesError> {
        match code.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Country([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(ItunesError::InvalidParameter(format!(
                "country code must be two ASCII letters, got {:?}",
                code
            ))),
        }
    }

    /// Uppercase form used in search queries (`US`).
    pub fn alpha2(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }

    /// Lowercase form used in chart feed paths (`us`).
    pub fn to_lowercase(&self) -> String {
        self.alpha2().to_ascii_lowercase()
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::US
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alpha2())
    }
}

impl FromStr for Country {
    type Err = ItunesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::new(s)
    }
}

impl TryFrom<String> for Country {
    type Error = ItunesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Country::new(&s)
    }
}

impl From<Country> for String {
    fn from(c: Country) -> Self {
        c.alpha2()
    }
}

/// Language of the text fields in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en_us")]
    English,
    #[serde(rename = "ja_jp")]
    Japanese,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "en_us",
            Language::Japanese => "ja_jp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search API versions the remote service understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    One,
    #[default]
    Two,
}

impl ApiVersion {
    pub fn number(self) -> u32 {
        match self {
            ApiVersion::One => 1,
            ApiVersion::Two => 2,
        }
    }

    /// Checks a raw version number, as accepted by the search builder.
    pub fn from_number(n: u32) -> Result<Self, ItunesError> {
        match n {
            1 => Ok(ApiVersion::One),
            2 => Ok(ApiVersion::Two),
            other => Err(ItunesError::InvalidParameter(format!(
                "invalid api version {}, expected 1 or 2",
                other
            ))),
        }
    }
}

impl From<ApiVersion> for u32 {
    fn from(v: ApiVersion) -> Self {
        v.number()
    }
}

/// Wire value of the `explicit` query parameter.
pub fn explicit_flag(allow: bool) -> &'static str {
    if allow {
        "Yes"
    } else {
        "No"
    }
}
