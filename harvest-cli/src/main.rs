//! Harvest CLI - Command line interface for harvest scheduling
//!
//! Estimates harvest dates for crop plantings and prints them as a table.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use harvest_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ScheduleArgs;

/// Harvest: estimate harvest dates from plant dates and days to maturity
#[derive(Parser, Debug)]
#[command(name = "harvest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/harvest/config.toml)
    #[arg(long, global = true, env = "HARVEST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Calculate and print the harvest schedule
    #[command(visible_alias = "s")]
    Schedule(ScheduleArgs),

    /// Show current configuration
    Config,
}

/// Log level used when RUST_LOG is not set
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("harvest {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Schedule(args)) => {
            let config = Config::load_with_env(cli.config.as_deref())?;
            args.execute(cli.verbose, config)?;
        }
        Some(Commands::Config) => {
            let config = Config::load_with_env(cli.config.as_deref())?;
            print_config(&config, cli.config.as_deref());
        }
        None => {
            let config = Config::load_with_env(cli.config.as_deref())?;
            ScheduleArgs::default().execute(cli.verbose, config)?;
        }
    }

    Ok(())
}

fn print_config(config: &Config, explicit_path: Option<&std::path::Path>) {
    println!("Harvest Configuration");
    println!("=====================");
    println!();
    println!("Schedule Settings:");
    println!("  allow_negative_dtm: {}", config.schedule.allow_negative_dtm);
    println!();
    println!("Output Settings:");
    println!("  format: {:?}", config.output.format);
    println!();
    println!("Input Settings:");
    match &config.input.path {
        Some(path) => println!("  path: {}", path.display()),
        None => println!("  path: (built-in demo plantings)"),
    }
    println!();

    let path = explicit_path
        .map(|p| p.to_path_buf())
        .or_else(Config::default_config_path);
    if let Some(path) = path {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
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
    fn test_parse_schedule_args() {
        let cli = Cli::parse_from([
            "harvest",
            "schedule",
            "--input",
            "beds.toml",
            "--format",
            "json",
            "--strict-dtm",
        ]);
        match cli.command {
            Some(Commands::Schedule(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("beds.toml")));
                assert_eq!(args.format, Some(commands::schedule::FormatArg::Json));
                assert!(args.strict_dtm);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(true), "info");
        assert_eq!(default_log_level(false), "warn");
    }

    #[test]
    fn test_verbose_filter_enables_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = log_filter(true);
        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::INFO));
        let filter = log_filter(false);
        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::WARN));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["harvest", "-v"]);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
