//! Ferrule CLI - Inspect interned symbols and keywords.
//!
//! This is the main entry point for the ferrule CLI application.
//! It parses arguments with clap, sets up logging, builds an identifier
//! runtime from the configuration and dispatches to a command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ferrule_ident::Runtime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    hash::{run_hash, HashArgs},
    verify::{run_verify, VerifyArgs},
};
use config::Config;
use error::{FerruleError, Result};

/// Ferrule - hash codes for symbols and keywords
///
/// Ferrule computes the hash codes a runtime assigns to identifier
/// literals and checks constant tables against them.
#[derive(Parser, Debug)]
#[command(name = "ferrule")]
#[command(author = "Ferrule Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect interned symbols and keywords", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FERRULE_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FERRULE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "FERRULE_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ferrule CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print hash codes of identifier literals
    ///
    /// Literals starting with `:` are keywords, anything else is a symbol.
    /// A `/` after the first character separates namespace and name.
    Hash(HashCommand),

    /// Check a constants manifest against computed hash codes
    ///
    /// Without a manifest the built-in core constants are checked.
    Verify(VerifyCommand),
}

/// Arguments for the hash subcommand.
#[derive(Parser, Debug)]
struct HashCommand {
    /// Identifier literals, e.g. `:cljs.core/none` or `first`
    #[arg(required = true)]
    literals: Vec<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the verify subcommand.
#[derive(Parser, Debug)]
struct VerifyCommand {
    /// TOML manifest of `[[constant]]` entries
    manifest: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the ferrule CLI.
///
/// Errors are reported on stderr with their display message and a
/// non-zero exit status.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, initialize logging and run the selected command.
///
/// Configuration is read first so that `verbose = true` in the file
/// enables debug logging just like the `--verbose` flag.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    tracing::debug!("configuration: {:?}", config);

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so that reports on stdout stay machine-readable.
/// Records emitted through `log` by the identifier library are forwarded
/// to the same subscriber.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| FerruleError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Hash(args) => execute_hash(args, config),
        Commands::Verify(args) => execute_verify(args, config),
    }
}

/// Execute the hash command.
fn execute_hash(args: HashCommand, config: Config) -> Result<()> {
    let runtime = Runtime::with_config(config.runtime)?;
    let hash_args = HashArgs {
        literals: args.literals,
        format: args.format.unwrap_or(config.format),
    };
    run_hash(hash_args, &runtime)
}

/// Execute the verify command.
fn execute_verify(args: VerifyCommand, config: Config) -> Result<()> {
    let verify_args = VerifyArgs {
        manifest: args.manifest,
        format: args.format.unwrap_or(config.format),
    };
    run_verify(verify_args)
}
