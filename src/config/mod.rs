use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use shellexpand_utils::{canonicalize, expand};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Represents the user config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    pub display_name: Option<String>,
    pub from: String,
    pub subject: String,
    pub sendmail_cmd: Option<String>,
    pub recipients: Option<PathBuf>,
    pub unsubscribe_url: Option<String>,
}

impl TomlConfig {
    /// Read and parse the TOML configuration at the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("reading config file at {path:?}");
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file at {path:?}"))?;
        toml::from_str(&content).with_context(|| format!("cannot parse config file at {path:?}"))
    }

    /// Read and parse the TOML configuration at the optional given
    /// path, falling back to the first valid default path.
    pub fn from_some_path_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_default_paths(),
        }
    }

    fn from_default_paths() -> Result<Self> {
        match Self::first_valid_default_path() {
            Some(path) => Self::from_path(&path),
            None => Err(anyhow!("cannot find config file from default paths")),
        }
    }

    fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("cannot get config directory"))?;
        Ok(dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
    }

    fn first_valid_default_path() -> Option<PathBuf> {
        Self::default_path().ok().filter(|path| path.exists())
    }
}

/// Parse a configuration file path as [`PathBuf`].
///
/// The path is shell-expanded then canonicalized (if applicable).
pub fn path_parser(path: &str) -> Result<PathBuf, String> {
    expand::try_path(path)
        .map(canonicalize::path)
        .map_err(|err| err.to_string())
}
