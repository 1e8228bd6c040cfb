//! Scheduled publishing.
//!
//! A post dated in the future still counts as published once it is at most
//! `scheduledPostMargin` ahead of now. Drafts are never listed in
//! production builds.

use super::Post;
use crate::config::{PostMargin, SiteConfig};
use chrono::{DateTime, Utc};

/// `true` when `publish_time - now <= margin`.
#[inline]
pub fn is_published(publish_time: DateTime<Utc>, now: DateTime<Utc>, margin: PostMargin) -> bool {
    publish_time.signed_duration_since(now) <= margin.as_delta()
}

/// Development builds list scheduled posts early so they can be previewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

/// Decides which posts appear in listings, feeds and archives.
#[derive(Debug, Clone, Copy)]
pub struct PublishFilter {
    margin: PostMargin,
    mode: BuildMode,
    now: DateTime<Utc>,
}

impl PublishFilter {
    pub fn new(config: &SiteConfig, mode: BuildMode, now: DateTime<Utc>) -> Self {
        Self {
            margin: config.scheduled_post_margin,
            mode,
            now,
        }
    }

    pub fn is_visible(&self, post: &Post) -> bool {
        if post.draft {
            return false;
        }
        self.mode == BuildMode::Development || is_published(post.publish_time, self.now, self.margin)
    }

    /// Visible posts, in input order.
    pub fn filter<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|p| self.is_visible(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_margin_boundaries() {
        let margin = PostMargin::from_millis(900_000).unwrap();
        let now = now();

        assert!(is_published(now + TimeDelta::milliseconds(600_000), now, margin));
        assert!(!is_published(now + TimeDelta::milliseconds(1_200_000), now, margin));
        // exactly on the margin still counts
        assert!(is_published(now + TimeDelta::milliseconds(900_000), now, margin));
        assert!(is_published(now - TimeDelta::days(30), now, margin));
    }

    #[test]
    fn test_zero_margin() {
        let now = now();
        assert!(is_published(now, now, PostMargin::ZERO));
        assert!(!is_published(now + TimeDelta::seconds(1), now, PostMargin::ZERO));
    }

    #[test]
    fn test_filter_skips_drafts_and_future_posts() {
        let config = SiteConfig::default();
        let now = now();
        let posts = vec![
            Post::new("old", now - TimeDelta::days(1)),
            Post {
                draft: true,
                ..Post::new("draft", now - TimeDelta::days(1))
            },
            Post::new("soon", now + TimeDelta::minutes(10)),
            Post::new("later", now + TimeDelta::hours(2)),
        ];

        let filter = PublishFilter::new(&config, BuildMode::Production, now);
        let slugs: Vec<_> = filter.filter(&posts).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["old", "soon"]);

        let filter = PublishFilter::new(&config, BuildMode::Development, now);
        let slugs: Vec<_> = filter.filter(&posts).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["old", "soon", "later"]);
    }
}
