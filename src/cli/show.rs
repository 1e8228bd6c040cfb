//! `sitecfg show`: print the resolved configuration.

use super::ShowFormat;
use crate::config::SiteConfig;
use crate::site::effective_lang;
use anyhow::Result;
use serde::Serialize;

/// The config plus values collaborators derive from it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolved<'a> {
    #[serde(flatten)]
    config: &'a SiteConfig,
    effective_lang: &'a str,
}

/// Render `config` in the requested format.
pub fn render(config: &SiteConfig, format: ShowFormat) -> Result<String> {
    let out = match format {
        ShowFormat::Json => {
            let resolved = Resolved {
                config,
                effective_lang: effective_lang(config),
            };
            let mut json = serde_json::to_string_pretty(&resolved)?;
            json.push('\n');
            json
        }
        ShowFormat::Toml => {
            let mut toml = format!("# effective lang: {}\n", effective_lang(config));
            toml.push_str(&toml::to_string(config)?);
            toml
        }
    };
    Ok(out)
}

/// `sitecfg show`
pub fn run(config: &SiteConfig, format: ShowFormat) -> Result<()> {
    print!("{}", render(config, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_json_includes_effective_lang() {
        let config = test_parse_config("lang = \"\"");
        let out = render(&config, ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["lang"], "");
        assert_eq!(value["effectiveLang"], "en");
        assert_eq!(value["postPerPage"], 10);
        assert_eq!(value["editPost"]["enabled"], false);
    }

    #[test]
    fn test_toml_output_loads_back() {
        let config = test_parse_config("ogImage = \"default.jpg\"\ntimezone = \"Europe/Berlin\"");
        let out = render(&config, ShowFormat::Toml).unwrap();
        assert!(out.starts_with("# effective lang: en"));
        assert_eq!(SiteConfig::from_str(&out).unwrap(), config);
    }
}
