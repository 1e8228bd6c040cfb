//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Check that `value` is an absolute http(s) URL with a host.
///
/// Reports every problem found into `diag`.
pub fn check_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com/",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com/",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com/",
            );
        }
    }
}

/// Loose BCP 47 check: a 2-8 letter primary subtag followed by
/// 1-8 character alphanumeric subtags (`en`, `zh-Hans`, `pt-BR`).
pub fn is_valid_lang_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok
        && parts.all(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/src/pages/  ← cwd
/// /home/user/blog/site.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_url() {
        let field = FieldPath::new("website");

        let mut diag = ConfigDiagnostics::new();
        check_url(field, "https://mikokono.de/", &mut diag);
        check_url(field, "http://localhost:4321/blog", &mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        check_url(field, "mikokono.de", &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        check_url(field, "ftp://example.com/", &mut diag);
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_lang_tags() {
        for ok in ["en", "de", "zh-Hans", "pt-BR", "sr-Latn-RS"] {
            assert!(is_valid_lang_tag(ok), "{ok}");
        }
        for bad in ["", "e", "en_US", "en-", "12", "en-toolongsubtag"] {
            assert!(!is_valid_lang_tag(bad), "{bad}");
        }
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/pages/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, temp.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-config-file.toml")).is_none());
    }
}
