//! `sitecfg status`: apply the scheduled post margin to one post.

use crate::config::SiteConfig;
use crate::site::{BuildMode, DisplayDate, Post, PublishFilter};
use chrono::{DateTime, Utc};

/// Human-readable verdict for a post published at `publish_time`.
pub fn describe(
    config: &SiteConfig,
    publish_time: DateTime<Utc>,
    now: DateTime<Utc>,
    draft: bool,
    mode: BuildMode,
) -> String {
    let post = Post {
        draft,
        ..Post::new("status", publish_time)
    };
    let filter = PublishFilter::new(config, mode, now);
    let shown = DisplayDate::for_post(config, &post);

    if filter.is_visible(&post) {
        return format!("published ({} {}, {})", shown.date, shown.time, config.timezone);
    }
    if draft {
        return "hidden: draft".to_string();
    }

    let visible_at = publish_time - config.scheduled_post_margin.as_delta();
    let at = DisplayDate::new(visible_at, config.timezone);
    format!("scheduled: visible from {} {} ({})", at.date, at.time, config.timezone)
}

/// `sitecfg status`
pub fn run(
    config: &SiteConfig,
    publish_time: DateTime<Utc>,
    now: Option<DateTime<Utc>>,
    draft: bool,
    dev: bool,
) {
    let mode = if dev {
        BuildMode::Development
    } else {
        BuildMode::Production
    };
    println!(
        "{}",
        describe(config, publish_time, now.unwrap_or_else(Utc::now), draft, mode)
    );
}
