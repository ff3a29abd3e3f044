//! rag CLI tool.
//!
//! Usage:
//! ```bash
//! rag check [OPTIONS] <FILE>
//! rag extract <FILE>
//! rag list-rules
//! rag init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rag::Dialect;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Architecture linter for React components and hooks
#[derive(Parser)]
#[command(name = "rag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one source file
    Check {
        /// File to analyze
        file: PathBuf,

        /// Output format (default: json, or `[output] format` from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Parse as this dialect instead of inferring from the extension
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with status 1 when an error-severity violation is reported
        #[arg(long)]
        fail_on_error: bool,
    },

    /// Print the functions found in a file, as JSON
    Extract {
        /// File to read
        file: PathBuf,

        /// Parse as this dialect instead of inferring from the extension
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for analysis results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The `AnalysisResult` as a single JSON object.
    #[default]
    Json,
    /// Human-readable text output.
    Text,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            file,
            format,
            dialect,
            pretty,
            fail_on_error,
        } => commands::check::run(
            &file,
            &commands::check::CheckOptions {
                format,
                dialect,
                pretty,
                fail_on_error,
            },
            cli.config.as_deref(),
        ),
        Commands::Extract {
            file,
            dialect,
            pretty,
        } => commands::extract::run(&file, dialect, pretty, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
