//! Positive post counts (`postPerIndex`, `postPerPage`).

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroUsize};

/// Number of posts shown on a page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PostCount(NonZeroUsize);

impl PostCount {
    /// Build a count, rejecting zero and negative values.
    pub fn new(n: i64) -> Result<Self, ConfigError> {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(ConfigError::InvalidCount(n))
    }

    /// Count known to be positive at compile time.
    pub const fn from_nonzero(n: NonZeroUsize) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for PostCount {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostCount> for u64 {
    fn from(count: PostCount) -> Self {
        count.get() as u64
    }
}

impl fmt::Display for PostCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_counts_accepted() {
        assert_eq!(PostCount::new(1).unwrap().get(), 1);
        assert_eq!(PostCount::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(PostCount::new(0), Err(ConfigError::InvalidCount(0))));
        assert!(matches!(PostCount::new(-3), Err(ConfigError::InvalidCount(-3))));
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let count = PostCount::new(4).unwrap();
        assert_eq!(serde_json::to_string(&count).unwrap(), "4");
        let parsed: PostCount = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.get(), 7);
        assert!(serde_json::from_str::<PostCount>("0").is_err());
    }
}
