//! Text direction for the root `<html dir>` attribute.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Text direction. Only the three HTML values are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    /// Left to right (default).
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
    /// Let the user agent decide from content.
    Auto,
}

impl Direction {
    pub const ALL: [Self; 3] = [Self::Ltr, Self::Rtl, Self::Auto];

    const EXPECTED: &'static str = "ltr, rtl, auto";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidEnumValue {
                field: "dir",
                value: s.to_string(),
                expected: Self::EXPECTED,
            })
    }
}

impl TryFrom<String> for Direction {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("ltr".parse::<Direction>().unwrap(), Direction::Ltr);
        assert_eq!("rtl".parse::<Direction>().unwrap(), Direction::Rtl);
        assert_eq!("auto".parse::<Direction>().unwrap(), Direction::Auto);
    }

    #[test]
    fn test_reject_unknown_values() {
        for bad in ["", "LTR", "sideways", "ttb"] {
            let err = bad.parse::<Direction>().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnumValue { field: "dir", .. }));
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Direction::Rtl).unwrap();
        assert_eq!(json, "\"rtl\"");
        let parsed: Direction = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, Direction::Auto);
        let err = serde_json::from_str::<Direction>("\"up\"").unwrap_err();
        assert!(err.to_string().contains("expected one of: ltr, rtl, auto"));
    }
}
