//! sitecfg - check and inspect a blog's site configuration.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitecfg::{
    SiteConfig,
    cli::{self, Cli, Commands},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry } => cli::init::run(&cli.init_target()?, *dry),
        Commands::Check { strict } => cli::check::run(&cli.resolve_config()?, *strict),
        Commands::Show { format } => {
            let config = SiteConfig::load(&cli.resolve_config()?)?;
            cli::show::run(&config, *format)
        }
        Commands::Status {
            publish_time,
            now,
            draft,
            dev,
        } => {
            let config = SiteConfig::load(&cli.resolve_config()?)?;
            cli::status::run(&config, *publish_time, *now, *draft, *dev);
            Ok(())
        }
    }
}
