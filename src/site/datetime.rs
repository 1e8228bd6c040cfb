//! Post dates in the site timezone.

use super::Post;
use crate::config::{SiteConfig, Timezone};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// A timestamp prepared for display, e.g. `"5 Mar, 2025"` and `"03:07 PM"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDate {
    pub date: String,
    pub time: String,
    /// RFC 3339 with the zone offset, for `<time datetime>`.
    pub iso: String,
}

impl DisplayDate {
    pub fn new(at: DateTime<Utc>, timezone: Timezone) -> Self {
        let local: DateTime<Tz> = at.with_timezone(&timezone.tz());
        Self {
            date: local.format("%-d %b, %Y").to_string(),
            time: local.format("%I:%M %p").to_string(),
            iso: local.to_rfc3339(),
        }
    }

    /// Publish date of `post`, in its own timezone if it sets one.
    pub fn for_post(config: &SiteConfig, post: &Post) -> Self {
        Self::new(post.publish_time, post.timezone.unwrap_or(config.timezone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_site_timezone() {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 23, 30, 0).unwrap();
        let berlin: Timezone = "Europe/Berlin".parse().unwrap();

        let shown = DisplayDate::new(at, berlin);
        // 23:30 UTC is already the next day in Berlin (UTC+1 in March)
        assert_eq!(shown.date, "6 Mar, 2025");
        assert_eq!(shown.time, "12:30 AM");
        assert_eq!(shown.iso, "2025-03-06T00:30:00+01:00");
    }

    #[test]
    fn test_post_timezone_overrides_site() {
        let mut config = SiteConfig::default();
        config.timezone = "Europe/Berlin".parse().unwrap();

        let at = Utc.with_ymd_and_hms(2025, 7, 1, 15, 7, 0).unwrap();
        let mut post = Post::new("hello", at);
        assert_eq!(DisplayDate::for_post(&config, &post).time, "05:07 PM");

        post.timezone = Some("Asia/Bangkok".parse().unwrap());
        let shown = DisplayDate::for_post(&config, &post);
        assert_eq!(shown.date, "1 Jul, 2025");
        assert_eq!(shown.time, "10:07 PM");
    }
}
