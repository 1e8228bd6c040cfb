//! Social-preview (Open Graph) image resolution.
//!
//! Order of precedence for a page:
//!
//! 1. the page's own `ogImage`
//! 2. a generated `/posts/<slug>/index.png`, for posts when `dynamicOgImage` is on
//! 3. the site `ogImage`
//! 4. the generated site-wide `/og.png` when `dynamicOgImage` is on
//!
//! With `dynamicOgImage = false` and `ogImage = "default.jpg"` every page
//! without an override therefore resolves to `default.jpg`.

use super::Post;
use crate::config::SiteConfig;
use url::Url;

/// Path of the generated site-wide image.
const SITE_GENERATED: &str = "/og.png";

/// What a preview image is needed for.
#[derive(Debug, Clone, Copy)]
pub enum PageRef<'a> {
    Post(&'a Post),
    /// Any other page, with its own optional override.
    Page { og_image: Option<&'a str> },
}

/// Resolved preview image and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OgImage {
    /// Set on the page itself.
    Page(String),
    /// Rendered by the image generator.
    Generated(String),
    /// The site-wide static `ogImage`.
    Site(String),
}

impl OgImage {
    pub fn resolve(config: &SiteConfig, page: PageRef<'_>) -> Option<Self> {
        let own = match page {
            PageRef::Post(post) => post.og_image.as_deref(),
            PageRef::Page { og_image } => og_image,
        };
        if let Some(image) = own.filter(|i| !i.is_empty()) {
            return Some(Self::Page(image.to_string()));
        }

        if config.dynamic_og_image
            && let PageRef::Post(post) = page
        {
            return Some(Self::Generated(format!("{}/index.png", post.url_path())));
        }

        if let Some(image) = config.og_image.as_deref() {
            return Some(Self::Site(image.to_string()));
        }

        config
            .dynamic_og_image
            .then(|| Self::Generated(SITE_GENERATED.to_string()))
    }

    /// Path or URL as configured.
    pub fn path(&self) -> &str {
        match self {
            Self::Page(p) | Self::Generated(p) | Self::Site(p) => p,
        }
    }

    /// Absolute URL against `website`. Already absolute paths are kept.
    pub fn absolute(&self, config: &SiteConfig) -> Result<Url, url::ParseError> {
        Url::parse(&config.website)?.join(self.path())
    }
}
