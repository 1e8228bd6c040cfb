//! `sitecfg check`: load, validate and report.

use crate::config::{ConfigError, SiteConfig};
use crate::log;
use crate::utils::plural::plural_count;
use anyhow::{Result, bail};
use std::path::Path;

/// Validate the config at `path`, printing every finding.
///
/// With `strict`, unknown fields fail the check instead of warning.
pub fn run(path: &Path, strict: bool) -> Result<()> {
    let loaded = SiteConfig::from_path(path)?;
    let diag = loaded.diagnose();
    diag.print_hints_and_warnings();

    let unknown = diag.unknown().len();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    if strict && unknown > 0 {
        bail!(
            "{} in {} (strict mode)",
            plural_count(unknown, "unknown field"),
            path.display()
        );
    }

    log!("ok"; "{} is valid", path.display());
    Ok(())
}
