//! Check command implementation.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use rag::{Config, Dialect};
use std::path::Path;

use crate::config_resolver;
use crate::OutputFormat;

/// Flags of the check command that can also come from configuration.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// `--format`; falls back to `[output] format`, then JSON.
    pub format: Option<OutputFormat>,
    /// `--dialect`; falls back to `[dialects]`, then the file extension.
    pub dialect: Option<Dialect>,
    /// `--pretty`, or'd with `[output] pretty`.
    pub pretty: bool,
    /// `--fail-on-error`, or'd with `[output] fail_on_error`.
    pub fail_on_error: bool,
}

/// Runs the check command.
pub fn run(file: &Path, options: &CheckOptions, config_path: Option<&Path>) -> Result<()> {
    let config = config_resolver::load_for(file, config_path)?;
    let format = resolve_format(options.format, &config)?;
    let dialect = options.dialect.unwrap_or_else(|| config.dialect_for(file));
    let pretty = options.pretty || config.output.pretty;

    tracing::debug!("Analyzing {} as {dialect}", file.display());

    let result = match rag::analyze_file_as(file, dialect) {
        Ok(result) => result,
        Err(e) => {
            let report = miette::Report::new(e).wrap_err("failed to analyze file");
            eprintln!("{report:?}");
            std::process::exit(1);
        }
    };

    super::output::print(&result, format, pretty)?;

    if (options.fail_on_error || config.output.fail_on_error) && result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.output.format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true)
            .map_err(|e| anyhow!("Invalid output format in config: {e}")),
        None => Ok(OutputFormat::default()),
    }
}
