//! Parse-time mirror of [`SiteConfig`].
//!
//! Constrained fields are read as plain strings and integers and converted
//! afterwards, so a bad value comes back as its own [`ConfigError`] variant
//! rather than as text inside a parser error.

use super::{ConfigError, EditPostConfig, PostCount, PostMargin, SiteConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawSiteConfig {
    website: String,
    author: String,
    profile: String,
    desc: String,
    title: String,
    og_image: Option<String>,
    light_and_dark_mode: bool,
    post_per_index: i64,
    post_per_page: i64,
    scheduled_post_margin: i64,
    show_archives: bool,
    show_back_button: bool,
    edit_post: EditPostConfig,
    dynamic_og_image: bool,
    dir: String,
    lang: Option<String>,
    timezone: String,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        SiteConfig::default().into()
    }
}

impl From<SiteConfig> for RawSiteConfig {
    fn from(config: SiteConfig) -> Self {
        Self {
            website: config.website,
            author: config.author,
            profile: config.profile,
            desc: config.desc,
            title: config.title,
            og_image: config.og_image,
            light_and_dark_mode: config.light_and_dark_mode,
            post_per_index: config.post_per_index.get() as i64,
            post_per_page: config.post_per_page.get() as i64,
            scheduled_post_margin: config.scheduled_post_margin.as_millis(),
            show_archives: config.show_archives,
            show_back_button: config.show_back_button,
            edit_post: config.edit_post,
            dynamic_og_image: config.dynamic_og_image,
            dir: config.dir.as_str().to_string(),
            lang: config.lang,
            timezone: config.timezone.name().to_string(),
        }
    }
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSiteConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            website: raw.website,
            author: raw.author,
            profile: raw.profile,
            desc: raw.desc,
            title: raw.title,
            og_image: raw.og_image,
            light_and_dark_mode: raw.light_and_dark_mode,
            post_per_index: PostCount::new(raw.post_per_index)?,
            post_per_page: PostCount::new(raw.post_per_page)?,
            scheduled_post_margin: PostMargin::from_millis(raw.scheduled_post_margin)?,
            show_archives: raw.show_archives,
            show_back_button: raw.show_back_button,
            edit_post: raw.edit_post,
            dynamic_og_image: raw.dynamic_og_image,
            dir: raw.dir.parse()?,
            lang: raw.lang,
            timezone: raw.timezone.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, Timezone};

    #[test]
    fn test_defaults_convert_back_unchanged() {
        let config = SiteConfig::try_from(RawSiteConfig::default()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_conversion_checks_each_field() {
        let raw = RawSiteConfig {
            dir: "rtl".into(),
            timezone: "Asia/Tokyo".into(),
            ..Default::default()
        };
        let config = SiteConfig::try_from(raw).unwrap();
        assert_eq!(config.dir, Direction::Rtl);
        assert_eq!(config.timezone, "Asia/Tokyo".parse::<Timezone>().unwrap());

        let raw = RawSiteConfig {
            scheduled_post_margin: -10,
            ..Default::default()
        };
        assert!(matches!(
            SiteConfig::try_from(raw),
            Err(ConfigError::InvalidDuration(-10))
        ));
    }
}
