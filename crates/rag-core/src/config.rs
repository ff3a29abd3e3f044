//! Configuration types for rag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::Dialect;

/// Top-level configuration, read from `rag.toml`.
///
/// Configuration only affects how files are parsed and how results are
/// printed. The rule set itself is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// File extension to dialect overrides (e.g., `".es6" = "javascript"`).
    #[serde(default)]
    pub dialects: BTreeMap<String, Dialect>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves the dialect for `path`: overrides first, then the extension default.
    #[must_use]
    pub fn dialect_for(&self, path: &Path) -> Dialect {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Dialect::from_path(path);
        };

        self.dialects
            .iter()
            .find(|(key, _)| key.trim_start_matches('.').eq_ignore_ascii_case(ext))
            .map_or_else(|| Dialect::from_path(path), |(_, dialect)| *dialect)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (`json`, `text`, or `compact`).
    #[serde(default)]
    pub format: Option<String>,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,

    /// Exit non-zero when an error-severity violation is reported.
    #[serde(default)]
    pub fail_on_error: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.format.is_none());
        assert!(!config.output.pretty);
        assert!(config.dialects.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[output]
format = "text"
pretty = true
fail_on_error = true

[dialects]
".es6" = "javascript"
"js" = "jsx"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.output.format.as_deref(), Some("text"));
        assert!(config.output.pretty);
        assert!(config.output.fail_on_error);
        assert_eq!(config.dialects.len(), 2);
    }

    #[test]
    fn test_dialect_overrides() {
        let config = Config::parse(
            r#"
[dialects]
".es6" = "javascript"
"JS" = "tsx"
"#,
        )
        .expect("Failed to parse");

        assert_eq!(config.dialect_for(Path::new("a.es6")), Dialect::JavaScript);
        assert_eq!(config.dialect_for(Path::new("a.js")), Dialect::Tsx);
        assert_eq!(config.dialect_for(Path::new("a.jsx")), Dialect::Jsx);
        assert_eq!(config.dialect_for(Path::new("README")), Dialect::TypeScript);
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let err = Config::parse("[dialects]\n\".x\" = \"coffeescript\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_config_parses() {
        let config = Config::parse("").expect("Failed to parse");
        assert!(config.dialects.is_empty());
    }
}
