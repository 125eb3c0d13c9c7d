use serde::Deserialize;
use yks_diagnostic::OutputFormat;

/// Configuration using environment variables
#[derive(Debug, PartialEq, Deserialize)]
pub struct EnvConfig {
    pub format: Option<Vec<OutputFormat>>,
    pub extensions: Option<Vec<String>>,
}

impl EnvConfig {
    /// Retrieves configuration from environment variables prefixed with `YAML_KEY_SORT_`
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("YAML_KEY_SORT_").from_env()
    }
}
