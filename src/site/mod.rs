//! Read-only helpers that apply the config's derived semantics.
//!
//! Renderers, feed builders and image generators live elsewhere; they call
//! into this module so that every one of them resolves language, preview
//! images, scheduling and pagination the same way.
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `post`     | Minimal post description consumed by helpers     |
//! | `publish`  | Scheduled post margin and draft filtering        |
//! | `html`     | Effective `lang` and `dir` for the root element  |
//! | `og`       | Social-preview image resolution                  |
//! | `paginate` | Index and listing page slicing                   |
//! | `datetime` | Dates in the site (or post) timezone             |
//! | `view`     | Which optional UI pieces a page exposes          |

mod datetime;
mod html;
mod og;
mod paginate;
mod post;
mod publish;
mod view;

pub use datetime::DisplayDate;
pub use html::{HtmlAttrs, effective_lang};
pub use og::{OgImage, PageRef};
pub use paginate::{Pagination, index_posts};
pub use post::Post;
pub use publish::{BuildMode, PublishFilter, is_published};
pub use view::{Affordances, EditLink};

/// Language used when `lang` is unset or empty.
pub const DEFAULT_LANG: &str = "en";
