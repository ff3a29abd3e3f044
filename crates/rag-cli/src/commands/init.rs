//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# rag configuration
#
# Searched next to the analyzed file (rag.toml, then .rag.toml), then in
# $RAG_CONFIG_DIR/config.toml or ~/.rag/config.toml.

[output]
# Default output format: "json", "text" or "compact"
format = "json"

# Pretty-print JSON output
pretty = false

# Exit with status 1 when an error-severity violation is reported
fail_on_error = false

# Extension to dialect overrides.
# Dialects: "javascript", "jsx", "typescript", "tsx"
[dialects]
# ".js" = "jsx"
# ".es6" = "javascript"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_template(Path::new("rag.toml"), force)?;

    println!("Created rag.toml");
    println!("\nNext steps:");
    println!("  1. Edit rag.toml to set output and dialect options");
    println!("  2. Run: rag check src/App.tsx");

    Ok(())
}

fn write_template(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
