//! Configuration management for the user registry
//!
//! Values come from built-in defaults, an optional `config.toml` in the
//! working directory, and `USER_REGISTRY_*` environment overrides, in that
//! order of precedence.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_NAME: &str = "config";
const ENV_PREFIX: &str = "USER_REGISTRY";
const DEFAULT_STORE_PATH: &str = "users.txt";
const DEFAULT_PROMPT: &str = "> ";

/// Registry configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Pipe-delimited user store file
    /// Environment: USER_REGISTRY_STORE_PATH
    pub store_path: String,

    /// Prompt printed before each console command
    /// Environment: USER_REGISTRY_PROMPT
    pub prompt: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from `config.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from the named file (extension optional, file optional)
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .set_default("prompt", DEFAULT_PROMPT)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: RegistryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration pointing at an explicit store file
    pub fn with_store_path(path: impl AsRef<Path>) -> Self {
        Self {
            store_path: path.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Get store path as PathBuf
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store_path)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.store_path.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "store_path cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
