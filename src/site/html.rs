//! Root element attributes.

use super::DEFAULT_LANG;
use crate::config::{Direction, SiteConfig};
use std::fmt;

/// `lang` to render: the configured tag, or "en" when unset or empty.
pub fn effective_lang(config: &SiteConfig) -> &str {
    config
        .lang
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANG)
}

/// `lang` and `dir` for `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlAttrs<'a> {
    pub lang: &'a str,
    pub dir: Direction,
}

impl<'a> HtmlAttrs<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            lang: effective_lang(config),
            dir: config.dir,
        }
    }
}

impl fmt::Display for HtmlAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang=\"{}\" dir=\"{}\"", self.lang, self.dir)
    }
}
