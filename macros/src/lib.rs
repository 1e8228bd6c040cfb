//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Config)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "editPost")]
//! /// "Edit this post" link settings.
//! pub struct EditPostConfig {
//!     /// Show the edit link on post pages.
//!     #[config(inline_doc)]
//!     pub enabled: bool,
//!
//!     /// Base URL the post source path is appended to.
//!     pub url: Option<String>,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - EditPostConfig::FIELDS.enabled -> FieldPath("editPost.enabled")
//! // - EditPostConfig::template() -> TOML string with comments
//! // - EditPostConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root table)
//! - `#[serde(rename_all = "...")]` - honored when computing TOML key names
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested section, rendered after the scalar keys
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//! - `#[serde(rename = "x")]` - honored like `name`
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `EditPostConfig` → `edit_post`
//! - `FeedConfig` → `feed`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
