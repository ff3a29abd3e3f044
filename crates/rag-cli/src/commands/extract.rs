//! Extract command implementation.

use anyhow::{Context, Result};
use rag::Dialect;
use std::path::Path;

use crate::config_resolver;

/// Runs the extract command: prints the file's function descriptors as JSON.
pub fn run(
    file: &Path,
    dialect: Option<Dialect>,
    pretty: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config_resolver::load_for(file, config_path)?;
    let dialect = dialect.unwrap_or_else(|| config.dialect_for(file));

    let functions = match rag::extract_file(file, dialect) {
        Ok(functions) => functions,
        Err(e) => {
            let report = miette::Report::new(e).wrap_err("failed to analyze file");
            eprintln!("{report:?}");
            std::process::exit(1);
        }
    };

    let json = if pretty || config.output.pretty {
        serde_json::to_string_pretty(&functions)
    } else {
        serde_json::to_string(&functions)
    }
    .context("Failed to serialize functions")?;
    println!("{json}");
    Ok(())
}
