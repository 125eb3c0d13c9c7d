//! # yaml-key-sort workspace
//!
//! Layered configuration and discovery of the YAML files to check.

use std::path::PathBuf;

#[cfg(feature = "cli")]
use config::cli_config::CliConfig;
use config::{
    CombinedConfig,
    env_config::EnvConfig,
    toml_config::{ConfigError, TomlConfig},
};
use thiserror::Error;

pub use discover::{DiscoverError, discover_files};

pub mod config;
mod discover;
mod search;

#[derive(Debug)]
pub struct Workspace {
    /// Directory the config file search started from
    pub path: PathBuf,

    /// The config file in use, if any
    pub config_file: Option<PathBuf>,

    pub config: CombinedConfig,
}

impl Workspace {
    /// Loads the configuration for `path`, reading the environment
    pub fn try_new(
        path: PathBuf,
        #[cfg(feature = "cli")] cli: Option<CliConfig>,
    ) -> Result<Self, WorkspaceError> {
        let env = EnvConfig::from_env()?;
        Self::with_env(
            path,
            #[cfg(feature = "cli")]
            cli,
            env,
        )
    }

    /// Loads the configuration for `path` with an explicit environment
    pub fn with_env(
        path: PathBuf,
        #[cfg(feature = "cli")] cli: Option<CliConfig>,
        env: EnvConfig,
    ) -> Result<Self, WorkspaceError> {
        let config_file = TomlConfig::find(&path);
        let toml = config_file
            .as_deref()
            .map(TomlConfig::load)
            .transpose()?;
        tracing::info!(?config_file, "loaded configuration");
        Ok(Self {
            path,
            config_file,
            config: CombinedConfig::merge(
                #[cfg(feature = "cli")]
                cli,
                Some(env),
                toml,
            ),
        })
    }

    /// Expands `paths` into the files to check, see [`discover_files`]
    pub fn discover(&self, paths: &[PathBuf]) -> Vec<Result<PathBuf, DiscoverError>> {
        discover_files(paths, &self.config.extensions)
    }
}

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Failed to load config")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration in environment")]
    Env(#[from] envy::Error),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use yks_diagnostic::OutputFormat;

    use super::*;

    fn empty_env() -> EnvConfig {
        EnvConfig {
            format: None,
            extensions: None,
        }
    }

    fn load(path: &str, env: EnvConfig) -> Workspace {
        Workspace::with_env(
            PathBuf::from(path),
            #[cfg(feature = "cli")]
            None,
            env,
        )
        .unwrap()
    }

    #[test]
    fn load_nearest() {
        let workspace = load("test_data", empty_env());
        assert_eq!(
            workspace.config,
            CombinedConfig {
                formats: vec![OutputFormat::Simple, OutputFormat::Verbose],
                extensions: vec!["yaml".to_owned()],
            }
        );
    }

    #[test]
    fn load_ancestor() {
        // `test_data/tree` has no config of its own
        let workspace = load("test_data/tree", empty_env());
        assert_eq!(
            workspace.config_file,
            Some(Path::new("test_data").join(".yaml-key-sort.toml"))
        );
        assert_eq!(workspace.config.extensions, vec!["yaml".to_owned()]);
    }

    #[test]
    fn env_overrides_file() {
        let env = EnvConfig {
            format: Some(vec![OutputFormat::Github]),
            extensions: None,
        };
        let workspace = load("test_data", env);
        assert_eq!(workspace.config.formats, vec![OutputFormat::Github]);
        assert_eq!(workspace.config.extensions, vec!["yaml".to_owned()]);
    }

    #[test]
    fn discover_with_configured_extensions() {
        let workspace = load("test_data", empty_env());
        let tree = Path::new("test_data").join("tree");
        let found: Vec<_> = workspace
            .discover(&[tree.clone()])
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(found, vec![tree.join("a.yaml"), tree.join("sub").join("c.yaml")]);
    }
}
