//! Finds the `rag.toml` that applies to an analyzed file.
//!
//! The first hit wins:
//!
//! 1. the `--config` path, taken as given
//! 2. `rag.toml`, then `.rag.toml`, in the analyzed file's directory
//! 3. `config.toml` in the user directory (`$RAG_CONFIG_DIR`, else `~/.rag`)
//!
//! With no hit, the built-in defaults apply.

use anyhow::{Context, Result};
use rag::Config;
use std::path::{Path, PathBuf};

/// File names looked up beside the analyzed file.
const LOCAL_NAMES: &[&str] = &["rag.toml", ".rag.toml"];

/// File name looked up in the user directory.
const USER_FILE: &str = "config.toml";

/// How the effective configuration file was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Named by `--config`.
    Flag(PathBuf),
    /// Sits beside the analyzed file.
    Local(PathBuf),
    /// Lives in the user directory.
    User(PathBuf),
    /// Nothing found.
    Builtin,
}

impl ConfigOrigin {
    /// Reads the chosen file, or returns the defaults for [`ConfigOrigin::Builtin`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::Flag(path) | Self::Local(path) | Self::User(path) => path,
            Self::Builtin => return Ok(Config::default()),
        };
        tracing::debug!("Loading config ({self:?})");
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Loads the configuration for `file`, honoring `--config` when given.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn load_for(file: &Path, flag: Option<&Path>) -> Result<Config> {
    let dir = file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    locate(dir, flag, user_dir().as_deref()).load()
}

/// Picks the configuration file for files in `dir`.
fn locate(dir: &Path, flag: Option<&Path>, user_dir: Option<&Path>) -> ConfigOrigin {
    if let Some(path) = flag {
        return ConfigOrigin::Flag(path.to_path_buf());
    }

    if let Some(path) = LOCAL_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    {
        return ConfigOrigin::Local(path);
    }

    user_dir
        .map(|dir| dir.join(USER_FILE))
        .filter(|path| path.is_file())
        .map_or(ConfigOrigin::Builtin, ConfigOrigin::User)
}

/// `$RAG_CONFIG_DIR` when set, otherwise `~/.rag`.
fn user_dir() -> Option<PathBuf> {
    std::env::var_os("RAG_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".rag")))
}
