//! Post metadata as seen by the helpers in this module.

use crate::config::Timezone;
use chrono::{DateTime, Utc};

/// The subset of a post's front matter the site helpers need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// URL slug, the post lives at `/posts/<slug>/`.
    pub slug: String,
    pub publish_time: DateTime<Utc>,
    pub draft: bool,
    /// Per-post preview image, wins over everything else.
    pub og_image: Option<String>,
    /// Per-post timezone for date display.
    pub timezone: Option<Timezone>,
    /// Source file path relative to the repository, for edit links.
    pub source_path: Option<String>,
}

impl Post {
    pub fn new(slug: impl Into<String>, publish_time: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            publish_time,
            ..Default::default()
        }
    }

    /// Site-relative URL path without trailing slash.
    pub fn url_path(&self) -> String {
        format!("/posts/{}", self.slug.trim_matches('/'))
    }
}
