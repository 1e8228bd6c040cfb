//! IANA timezone identifier, resolved against the tz database at load.

use super::ConfigError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A timezone known to the IANA database (e.g. `Europe/Berlin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    pub const UTC: Self = Self(chrono_tz::UTC);

    #[inline]
    pub const fn tz(self) -> Tz {
        self.0
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::UTC
    }
}

impl FromStr for Timezone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Tz>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidTimezone(s.to_string()))
    }
}

impl TryFrom<String> for Timezone {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.name().to_string()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zones() {
        let berlin: Timezone = "Europe/Berlin".parse().unwrap();
        assert_eq!(berlin.name(), "Europe/Berlin");
        assert_eq!(berlin.tz(), chrono_tz::Europe::Berlin);
        assert_eq!("UTC".parse::<Timezone>().unwrap(), Timezone::UTC);
    }

    #[test]
    fn test_unknown_zone_rejected() {
        for bad in ["", "Mars/Olympus", "Europe/Berlin "] {
            assert!(matches!(
                bad.parse::<Timezone>(),
                Err(ConfigError::InvalidTimezone(_))
            ));
        }
    }

    #[test]
    fn test_serde_roundtrips_name() {
        let tz: Timezone = serde_json::from_str("\"Asia/Bangkok\"").unwrap();
        assert_eq!(serde_json::to_string(&tz).unwrap(), "\"Asia/Bangkok\"");
    }
}
