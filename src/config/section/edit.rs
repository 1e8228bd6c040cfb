//! `[editPost]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [editPost]
//! enabled = true
//! text = "Suggest changes"
//! url = "https://github.com/alice/blog/edit/main/"
//! ```

use crate::config::{ConfigDiagnostics, util::check_url};
use macros::Config;
use serde::{Deserialize, Serialize};

/// "Edit this post" link shown on post pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "editPost")]
pub struct EditPostConfig {
    /// Show the edit link on post pages.
    #[config(inline_doc)]
    pub enabled: bool,

    /// Link label.
    #[config(inline_doc)]
    pub text: String,

    /// Base URL the post's source path is appended to.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for EditPostConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "Edit page".into(),
            url: None,
        }
    }
}

impl EditPostConfig {
    /// Validate the section.
    ///
    /// # Checks
    /// - If `enabled`, `url` must be set
    /// - `url` must be an absolute http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "{} is true but {} is not configured",
                    Self::FIELDS.enabled,
                    Self::FIELDS.url
                ),
                "e.g. \"https://github.com/<user>/<repo>/edit/main/\"",
            );
        }

        if let Some(url) = &self.url {
            check_url(Self::FIELDS.url, url, diag);
        }
    }

    /// Edit link for a post source file, `None` when the link is disabled.
    pub fn link_for(&self, source_path: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let base = self.url.as_deref()?;
        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            source_path.trim_start_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.edit_post.enabled);
        assert_eq!(config.edit_post.text, "Edit page");
        assert!(config.edit_post.url.is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[editPost]\nenabled = true\ntext = \"Fix typo\"\nurl = \"https://github.com/a/b/edit/main\"",
        );
        assert!(config.edit_post.enabled);
        assert_eq!(config.edit_post.text, "Fix typo");
        assert_eq!(
            config.edit_post.link_for("src/data/blog/hello.md").as_deref(),
            Some("https://github.com/a/b/edit/main/src/data/blog/hello.md")
        );
    }

    #[test]
    fn test_disabled_has_no_link() {
        let edit = EditPostConfig {
            enabled: false,
            url: Some("https://github.com/a/b/edit/main/".into()),
            ..Default::default()
        };
        assert_eq!(edit.link_for("post.md"), None);
    }

    #[test]
    fn test_enabled_requires_url() {
        let edit = EditPostConfig {
            enabled: true,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        edit.validate(&mut diag);
        assert!(diag.has_error_for(EditPostConfig::FIELDS.url));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(EditPostConfig::FIELDS.enabled.as_str(), "editPost.enabled");
        assert_eq!(EditPostConfig::FIELDS.url.as_str(), "editPost.url");
    }
}
