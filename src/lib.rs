//! sitecfg - typed, validated site configuration for blog generators.
//!
//! The configuration is loaded once at startup and handed to renderers as
//! an immutable value (or through a [`config::ConfigHandle`]); the [`site`]
//! module applies its derived rules so every consumer agrees on them.
//!
//! ```ignore
//! let config = SiteConfig::load(Path::new("site.toml"))?;
//! let attrs = site::HtmlAttrs::new(&config);
//! let filter = site::PublishFilter::new(&config, site::BuildMode::Production, Utc::now());
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod site;
pub mod utils;

pub use config::{ConfigError, ConfigHandle, SiteConfig};
