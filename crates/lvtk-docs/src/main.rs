//! LVtk documentation navigation CLI.
//!
//! Provides commands for:
//! - `resolve`: Show the up/previous/next footer for a location path
//! - `find`: Resolve a module identifier to a page link
//! - `routes`: List every page route in navigation order
//! - `check`: Validate the page table

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lvtk_config::{CliSettings, Config};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, FindArgs, ResolveArgs, RoutesArgs};
use error::CliError;
use output::Output;

/// LVtk documentation navigation.
#[derive(Parser)]
#[command(name = "lvtk-docs", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover lvtk-docs.toml).
    #[arg(short, long, global = true, env = "LVTK_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Reject page tables where pages share a module identifier.
    #[arg(long, global = true)]
    strict_module_ids: bool,

    /// Enable verbose output (INFO logs; set `RUST_LOG=debug` for resolution misses).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show footer navigation for a location path.
    Resolve(ResolveArgs),
    /// Find the page for a module identifier.
    Find(FindArgs),
    /// List all page routes.
    Routes(RoutesArgs),
    /// Validate the page table.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let cli_settings = CliSettings {
        strict_module_ids: cli.strict_module_ids.then_some(true),
    };
    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    if let Some(path) = &config.config_path {
        tracing::info!(path = %path.display(), "Loaded configuration");
    }

    let tree = config.page_tree()?;

    match cli.command {
        Commands::Resolve(args) => args.execute(&tree, output),
        Commands::Find(args) => args.execute(&tree, output),
        Commands::Routes(args) => {
            args.execute(&tree, output);
            Ok(())
        }
        Commands::Check(args) => args.execute(&config, &tree, output),
    }
}
