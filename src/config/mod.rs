//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested sections
//! │   └── edit       # [editPost]
//! ├── types/         # Field value types, errors, shared handle
//! ├── util.rs        # URL / language checks, config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The file is flat: every key of [`SiteConfig`] sits at the top level and
//! keeps its camelCase name, so the same document can be written as TOML or
//! JSON.
//!
//! ```toml
//! website = "https://example.com/"
//! author = "Alice"
//! title = "Notes"
//! postPerPage = 10
//! scheduledPostMargin = 900000
//! dir = "ltr"
//! timezone = "Europe/Berlin"
//!
//! [editPost]
//! enabled = false
//! ```

mod raw;
pub mod section;
pub mod types;
mod util;

pub use section::EditPostConfig;
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigHandle, Direction, FieldPath,
    PostCount, PostMargin, Timezone,
};
pub use util::{find_config_file, find_config_file_from};

use crate::{debug, utils::hash};
use anyhow::Result;
use macros::Config;
use raw::RawSiteConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
use util::{check_url, is_valid_lang_tag};

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "site.toml";

const DEFAULT_POST_PER_INDEX: NonZeroUsize = NonZeroUsize::new(4).unwrap();
const DEFAULT_POST_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

// ============================================================================
// root configuration
// ============================================================================

/// Site-wide metadata and feature toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase", try_from = "RawSiteConfig")]
#[config(section = "")]
pub struct SiteConfig {
    /// Deployed site URL (e.g. "https://example.com/").
    #[config(inline_doc)]
    pub website: String,

    /// Author display name.
    #[config(inline_doc)]
    pub author: String,

    /// Author profile URL.
    #[config(inline_doc)]
    pub profile: String,

    /// Site description.
    #[config(inline_doc)]
    pub desc: String,

    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Static social-preview image, used when no per-page image exists.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    /// Offer a light/dark theme toggle.
    #[config(inline_doc)]
    pub light_and_dark_mode: bool,

    /// Posts listed on the index page.
    #[config(inline_doc)]
    pub post_per_index: PostCount,

    /// Posts per paginated listing page.
    #[config(inline_doc)]
    pub post_per_page: PostCount,

    /// Milliseconds a future-dated post may be ahead and still count as published.
    #[config(inline_doc)]
    pub scheduled_post_margin: PostMargin,

    /// Link the archives page.
    #[config(inline_doc)]
    pub show_archives: bool,

    /// Show a back button on post pages.
    #[config(inline_doc)]
    pub show_back_button: bool,

    /// "Edit this post" link.
    #[config(sub)]
    pub edit_post: EditPostConfig,

    /// Generate a preview image per post instead of using `ogImage`.
    #[config(inline_doc)]
    pub dynamic_og_image: bool,

    /// Text direction: ltr | rtl | auto.
    #[config(inline_doc)]
    pub dir: Direction,

    /// HTML language code, "en" when empty.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// IANA timezone for dates (e.g. "Europe/Berlin").
    #[config(inline_doc)]
    pub timezone: Timezone,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            profile: String::new(),
            desc: String::new(),
            title: String::new(),
            og_image: None,
            light_and_dark_mode: true,
            post_per_index: PostCount::from_nonzero(DEFAULT_POST_PER_INDEX),
            post_per_page: PostCount::from_nonzero(DEFAULT_POST_PER_PAGE),
            scheduled_post_margin: PostMargin::from_minutes(15),
            show_archives: true,
            show_back_button: true,
            edit_post: EditPostConfig::default(),
            dynamic_og_image: true,
            dir: Direction::Ltr,
            lang: Some(crate::site::DEFAULT_LANG.into()),
            timezone: Timezone::UTC,
        }
    }
}

// ============================================================================
// loading
// ============================================================================

/// Input format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON, anything else TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// A parsed config file plus what the parser noticed along the way.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    /// Absolute or caller-relative path the config was read from.
    pub path: PathBuf,
    /// Keys present in the file that no field consumed.
    pub unknown: Vec<String>,
    /// Content hash, used to skip no-op reloads.
    pub hash: u64,
}

impl SiteConfig {
    /// Load, validate and report: the one-shot startup entry point.
    ///
    /// Unknown keys are reported as warnings, hints are printed, errors are
    /// returned all at once.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_path(path)?.validated()?.config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let raw: RawSiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(Self::try_from(raw)?)
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawSiteConfig = serde_json::from_str(content).map_err(ConfigError::from)?;
        Ok(Self::try_from(raw)?)
    }

    /// Read and parse a config file, collecting unknown fields.
    ///
    /// Does not validate; see [`Loaded::diagnose`].
    pub fn from_path(path: &Path) -> Result<Loaded> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(path, &content)
    }

    /// Parse `content` that was read from `path`.
    pub fn from_content(path: &Path, content: &str) -> Result<Loaded> {
        let (config, unknown) = Self::parse_with_ignored(content, ConfigFormat::from_path(path))?;
        debug!("config"; "parsed {}", path.display());

        Ok(Loaded {
            config,
            path: path.to_path_buf(),
            unknown,
            hash: hash::compute(content),
        })
    }

    /// Parse content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str, format: ConfigFormat) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let raw: RawSiteConfig = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })
                .map_err(ConfigError::from)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config =
                    serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                        ignored.push(path.to_string());
                    })
                    .map_err(ConfigError::from)?;
                deserializer.end().map_err(ConfigError::from)?;
                config
            }
        };
        Ok((Self::try_from(raw)?, ignored))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Enum, count, duration and timezone fields are already checked by
    /// their types while parsing; this covers everything else and returns
    /// all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect errors and hints without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_required(&mut diag);

        if !self.website.is_empty() {
            check_url(Self::FIELDS.website, &self.website, &mut diag);
        }
        if !self.profile.is_empty() {
            check_url(Self::FIELDS.profile, &self.profile, &mut diag);
        }

        if let Some(lang) = self.lang.as_deref().map(str::trim)
            && !lang.is_empty()
            && !is_valid_lang_tag(lang)
        {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("'{lang}' is not a valid language tag"),
                "use a BCP 47 code like \"en\", \"de\" or \"zh-Hans\"; leave empty for \"en\"",
            );
        }

        if let Some(image) = self.og_image.as_deref()
            && image.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.og_image,
                "must not be empty",
                "remove the key to go without a static preview image",
            );
        }

        if !self.dynamic_og_image && self.og_image.is_none() {
            diag.hint(
                Self::FIELDS.og_image,
                format!(
                    "{} is false and no {} is set, pages will have no preview image",
                    Self::FIELDS.dynamic_og_image,
                    Self::FIELDS.og_image
                ),
            );
        }

        self.edit_post.validate(&mut diag);

        diag
    }

    fn validate_required(&self, diag: &mut ConfigDiagnostics) {
        let required = [
            (Self::FIELDS.website, &self.website, "\"https://example.com/\""),
            (Self::FIELDS.author, &self.author, "your name"),
            (Self::FIELDS.title, &self.title, "the site name"),
        ];
        for (field, value, example) in required {
            if value.trim().is_empty() {
                diag.error_with_hint(field, "must not be empty", format!("set it to {example}"));
            }
        }
    }
}

impl Loaded {
    /// Validate the parsed config and attach unknown-field warnings.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = self.config.diagnose();
        diag.unknown_fields(self.unknown.iter().cloned());
        diag
    }

    /// Print hints and warnings, fail on errors.
    pub fn validated(self) -> Result<Self> {
        let diag = self.diagnose();
        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid config header for tests.
#[cfg(test)]
pub const TEST_REQUIRED: &str =
    "website = \"https://example.com/\"\nauthor = \"Test\"\ntitle = \"Test\"\n";

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("{TEST_REQUIRED}{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
