//! mathc - tokenizer for the math language.
//!
//! Parses command-line arguments, loads configuration, initializes logging
//! and runs a [`Session`] over the input files.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mathc_drv::{Config, DriverError, Options, OutputFormat, Result, Session};

/// mathc - Tokenize math language source files
///
/// Every line of a source file is one statement and must end with `;`.
#[derive(Parser, Debug)]
#[command(name = "mathc")]
#[command(author = "Mathc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize math language source files", long_about = None)]
struct Cli {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print per-kind token counts after each stream
    #[arg(short, long)]
    summary: bool,

    /// Enable verbose output
    #[arg(short, long, env = "MATHC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MATHC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MATHC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let mut options = Options::from_config(&config, cli.files);
    if let Some(format) = cli.format {
        options.format = format;
    }
    options.summary |= cli.summary;
    debug!(?options, "starting session");

    let session = Session::new(options)?;
    let stdout = std::io::stdout();
    session.run(&mut stdout.lock())
}

/// Initialize the logging system.
///
/// Events go to stderr so stdout carries only the token stream.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
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
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
