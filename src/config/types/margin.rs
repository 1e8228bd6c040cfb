//! Grace window for scheduled posts (`scheduledPostMargin`).

use super::ConfigError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative duration, stored and serialized as whole milliseconds.
///
/// A post whose publish time lies at most this far in the future is
/// treated as already published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PostMargin(i64);

impl PostMargin {
    pub const ZERO: Self = Self(0);

    /// Build a margin from milliseconds, rejecting negative values.
    pub fn from_millis(ms: i64) -> Result<Self, ConfigError> {
        if ms < 0 {
            return Err(ConfigError::InvalidDuration(ms));
        }
        Ok(Self(ms))
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes as i64 * 60 * 1000)
    }

    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Margin as a chrono duration for timestamp arithmetic.
    pub fn as_delta(self) -> TimeDelta {
        TimeDelta::try_milliseconds(self.0).unwrap_or(TimeDelta::MAX)
    }
}

impl TryFrom<i64> for PostMargin {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_millis(value)
    }
}

impl From<PostMargin> for i64 {
    fn from(margin: PostMargin) -> Self {
        margin.0
    }
}

impl fmt::Display for PostMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
