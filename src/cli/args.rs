//! Command-line interface definitions.

use crate::config::{CONFIG_FILE, find_config_file};
use crate::log;
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site configuration checker and inspector
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default config file
    #[command(visible_alias = "i")]
    Init {
        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the resolved configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },

    /// Tell whether a post with the given publish time is published
    Status {
        /// Publish time in RFC 3339 (e.g. 2025-03-01T09:00:00+01:00)
        #[arg(value_parser = parse_time)]
        publish_time: DateTime<Utc>,

        /// Reference time instead of the current clock
        #[arg(long, value_parser = parse_time)]
        now: Option<DateTime<Utc>>,

        /// The post is a draft
        #[arg(long)]
        draft: bool,

        /// Evaluate as a development build (scheduled posts are shown)
        #[arg(long)]
        dev: bool,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

impl Cli {
    /// Locate the config file for commands that read it.
    pub fn resolve_config(&self) -> Result<PathBuf> {
        match find_config_file(&self.config) {
            Some(path) => Ok(path),
            None => {
                log!(
                    "error";
                    "Config file '{}' not found. Run 'sitecfg init' to create one.",
                    self.config.display()
                );
                bail!("config file '{}' not found", self.config.display())
            }
        }
    }

    /// Target path for `init`: relative to the current directory, never searched.
    pub fn init_target(&self) -> Result<PathBuf> {
        if self.config.is_absolute() {
            return Ok(self.config.clone());
        }
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Ok(cwd.join(&self.config))
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 time like 2025-03-01T09:00:00Z: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::parse_from([
            "sitecfg",
            "status",
            "2025-03-01T10:00:00+01:00",
            "--now",
            "2025-03-01T08:50:00Z",
        ]);
        match cli.command {
            Commands::Status {
                publish_time, now, ..
            } => {
                assert_eq!(publish_time.to_rfc3339(), "2025-03-01T09:00:00+00:00");
                assert!(now.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_default_and_override() {
        let cli = Cli::parse_from(["sitecfg", "check"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));

        let cli = Cli::parse_from(["sitecfg", "-C", "blog.json", "show", "--format", "json"]);
        assert_eq!(cli.config, PathBuf::from("blog.json"));
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Json
            }
        ));
    }

    #[test]
    fn test_bad_time_rejected() {
        assert!(Cli::try_parse_from(["sitecfg", "status", "yesterday"]).is_err());
    }
}
