//! Optional UI pieces a rendered page exposes.

use super::Post;
use crate::config::SiteConfig;

/// "Edit this post" link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLink {
    pub text: String,
    pub url: String,
}

/// Toggles resolved for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    pub archives_link: bool,
    pub theme_toggle: bool,
    pub back_button: bool,
    pub edit_link: Option<EditLink>,
}

impl Affordances {
    /// Any page that is not a post: no back button, no edit link.
    pub fn for_page(config: &SiteConfig) -> Self {
        Self {
            archives_link: config.show_archives,
            theme_toggle: config.light_and_dark_mode,
            back_button: false,
            edit_link: None,
        }
    }

    /// Post detail page.
    ///
    /// The edit link needs `editPost.enabled`, an `editPost.url` and the
    /// post's source path.
    pub fn for_post(config: &SiteConfig, post: &Post) -> Self {
        let edit_link = post
            .source_path
            .as_deref()
            .and_then(|source| config.edit_post.link_for(source))
            .map(|url| EditLink {
                text: config.edit_post.text.clone(),
                url,
            });

        Self {
            back_button: config.show_back_button,
            edit_link,
            ..Self::for_page(config)
        }
    }
}
