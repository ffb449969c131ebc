//! Kdlt CLI - A command-line tool for lexing KDL documents.
//!
//! This is the main entry point for the kdlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    run_check, run_lex, CheckArgs, LexArgs,
};
use config::Config;
use error::{KdltError, Result};

/// Kdlt - A CLI tool for lexing KDL documents
///
/// Kdlt prints the token stream of KDL documents and checks collections
/// of sample documents for characters the lexer does not recognise.
#[derive(Parser, Debug)]
#[command(name = "kdlt")]
#[command(author = "KDL Tools Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for lexing KDL documents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KDLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KDLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KDLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kdlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of KDL documents
    ///
    /// Lexes each file and prints one line per token, or a JSON array
    /// with `--format json`.
    Lex(LexCommand),

    /// Check KDL documents for unrecognised characters
    ///
    /// Lexes every matching file under the given paths and reports the
    /// location of each unknown token.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Documents to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print skipped whitespace and comments
    #[arg(long)]
    show_skipped: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// File extension to look for in directories (repeatable)
    #[arg(short, long = "extension")]
    extensions: Vec<String>,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recursive: bool,

    /// Report unknown tokens without failing
    #[arg(long)]
    allow_unknown: bool,
}

/// Main entry point for the kdlt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that token listings on stdout stay clean.
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
        .map_err(|e| KdltError::Config(format!("Failed to initialize logging: {}", e)))?;

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
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        files: args.files,
        format: args.format,
        show_skipped: args.show_skipped,
    };
    run_lex(lex_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        paths: args.paths,
        extensions: args.extensions,
        no_recursive: args.no_recursive,
        allow_unknown: args.allow_unknown,
    };
    run_check(check_args, config)
}
