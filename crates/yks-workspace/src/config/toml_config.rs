use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use yks_diagnostic::OutputFormat;

use crate::search::search_ancestors;

/// The TOML configuration filename
pub const CONFIG_FILENAME: &str = ".yaml-key-sort.toml";

/// Configuration in TOML format
///
/// **Note**: It's up to the caller to perform validation after deserialization.
#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    pub format: Option<Vec<OutputFormat>>,
    pub extensions: Option<Vec<String>>,
}

impl TomlConfig {
    /// Looks for [`CONFIG_FILENAME`] in `start` or its ancestors
    pub fn find(start: &Path) -> Option<PathBuf> {
        search_ancestors(start, CONFIG_FILENAME)
    }

    /// Loads the config file from the file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(toml::from_str(&fs_err::read_to_string(path)?)?)
    }
}

/// Configuration errors encountered when loading the TOML config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize config")]
    Toml(#[from] toml::de::Error),
}
