//! Configuration file generation.

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitecfg configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Keys keep their camelCase names; the same document can be written as JSON.\n\n");
    out.push_str(&SiteConfig::template_with_header());

    out
}

/// Write the default configuration. Never overwrites an existing file.
pub fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// `sitecfg init`
pub fn run(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }
    write_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# sitecfg configuration file"));
        assert!(content.contains("scheduledPostMargin = 900000"));
        assert!(content.contains("[editPost]"));
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");
    }

    #[test]
    fn test_template_needs_only_required_fields() {
        let content = generate_config_template()
            .replace("website = \"\"", "website = \"https://example.com/\"")
            .replace("author = \"\"", "author = \"Alice\"")
            .replace("title = \"\"", "title = \"Notes\"");
        let (config, ignored) =
            SiteConfig::parse_with_ignored(&content, ConfigFormat::Toml).unwrap();
        assert!(ignored.is_empty());
        assert!(config.diagnose().is_empty());
    }
}
