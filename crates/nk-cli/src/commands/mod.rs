//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod export;
pub mod find;
pub mod formats;
pub mod plan;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nk_core::config::Config;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default project-local configuration file
pub const DEFAULT_CONFIG_PATH: &str = ".notekeep/config.toml";

/// notekeep - export notes as text or HTML and keep a daily plan
#[derive(Debug, Parser)]
#[command(name = "notekeep")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NOTEKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a note to a .txt or .html file
    Export(export::ExportArgs),

    /// Find all occurrences of text in a note
    Find(find::FindArgs),

    /// Manage the daily plan
    Plan(plan::PlanArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),

    /// List supported export formats
    Formats,
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let explicit_config = cli.config.as_deref();
    debug!("Using config file {:?}", config_path(explicit_config));

    // Dispatch to command handler
    match cli.command {
        Commands::Export(args) => export::execute(args, &load_config(explicit_config)?),
        Commands::Find(args) => find::execute(args, &load_config(explicit_config)?),
        Commands::Plan(args) => plan::execute(args, &load_config(explicit_config)?),
        Commands::Config(cmd) => config::execute(cmd, explicit_config),
        Commands::Formats => formats::execute(),
    }
}

/// Configuration file in effect
fn config_path(explicit: Option<&Path>) -> &Path {
    explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
}

/// Load the configuration file
///
/// An explicitly given file must exist; the default one may be absent.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
            .context("Failed to load config"),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
