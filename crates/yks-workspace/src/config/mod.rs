#[cfg(feature = "cli")]
use cli_config::CliConfig;
use env_config::EnvConfig;
use toml_config::TomlConfig;
use yks_diagnostic::OutputFormat;

#[cfg(feature = "cli")]
pub mod cli_config;
pub mod env_config;
pub mod toml_config;

/// Extensions of the files checked when walking a directory
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Helper macro for getting a field from structs.
///
/// First argument must be `cli,` or `@without_cli`. The former automatically removes itself when the `cli` feature is not enabled.
macro_rules! config_field {
  ($cli:ident, $($rest:ident),+; $field:ident) => {
    {
        #[cfg(feature = "cli")]
        { config_field!(@without_cli $cli, $($rest),+; $field) }
        #[cfg(not(feature = "cli"))]
        { config_field!(@without_cli $($rest),+; $field) }
    }
  };
  (@without_cli $start:ident$(, $fallback:ident)*; $field:ident) => {
      $start.as_ref().and_then(|value| value.$field.clone())
        $(
        .or_else(|| $fallback.as_ref().and_then(|value| value.$field.clone()))
        )*
  };
}

/// A composite configuration from multiple sources with following ordering:
///
/// - [`CliConfig`] (if `cli` feature is enabled)
/// - [`EnvConfig`]
/// - [`TomlConfig`]
#[derive(Debug, PartialEq)]
pub struct CombinedConfig {
    pub formats: Vec<OutputFormat>,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
}

impl Default for CombinedConfig {
    fn default() -> Self {
        Self {
            formats: vec![OutputFormat::Simple],
            extensions: DEFAULT_EXTENSIONS.map(str::to_owned).to_vec(),
        }
    }
}

impl CombinedConfig {
    /// Merges [`CliConfig`] (if `cli` feature is enabled), [`EnvConfig`] and [`TomlConfig`]
    ///
    /// Empty lists fall back to the defaults.
    #[must_use]
    pub fn merge(
        #[cfg(feature = "cli")] cli: Option<CliConfig>,
        env: Option<EnvConfig>,
        toml: Option<TomlConfig>,
    ) -> Self {
        let default = Self::default();
        let formats = config_field!(cli, env, toml; format)
            .filter(|formats| !formats.is_empty())
            .unwrap_or(default.formats);
        let extensions = config_field!(cli, env, toml; extensions)
            .map(|extensions| {
                extensions
                    .iter()
                    .map(|extension| extension.trim().trim_start_matches('.').to_owned())
                    .filter(|extension| !extension.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|extensions| !extensions.is_empty())
            .unwrap_or(default.extensions);
        Self {
            formats,
            extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge() {
        #[cfg(feature = "cli")]
        let cli = CliConfig {
            format: Some(vec![OutputFormat::Verbose]),
            extensions: None,
        };
        let env = EnvConfig {
            format: Some(vec![OutputFormat::Github]),
            extensions: Some(vec![".eyaml".into()]),
        };
        let toml = TomlConfig {
            format: Some(vec![OutputFormat::Simple]),
            extensions: Some(vec!["yml".into()]),
        };

        assert_eq!(
            CombinedConfig {
                formats: vec![if cfg!(feature = "cli") {
                    OutputFormat::Verbose
                } else {
                    OutputFormat::Github
                }],
                extensions: vec!["eyaml".into()],
            },
            CombinedConfig::merge(
                #[cfg(feature = "cli")]
                Some(cli),
                Some(env),
                Some(toml),
            )
        );
    }

    #[test]
    fn defaults() {
        let toml = TomlConfig {
            format: Some(Vec::new()),
            extensions: None,
        };
        assert_eq!(
            CombinedConfig::default(),
            CombinedConfig::merge(
                #[cfg(feature = "cli")]
                None,
                None,
                Some(toml),
            )
        );
        assert_eq!(
            CombinedConfig::default().extensions,
            vec!["yml".to_owned(), "yaml".to_owned()]
        );
    }
}
