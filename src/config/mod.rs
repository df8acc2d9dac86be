//! Configuration module for wordtrie.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML
//! or JSON), then environment variables. The merged result is validated
//! before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::{DictionaryConfig, PrefixTestConfig};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WORDTRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for wordtrie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WordTrieConfig {
    /// Word list and history locations
    pub dictionary: DictionaryConfig,

    /// Batch prefix test fixture locations
    pub prefix_test: PrefixTestConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for WordTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.prefix_test.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for wordtrie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(WordTrieConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<WordTrieConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&WordTrieConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let name = path
                .to_str()
                .ok_or_else(|| ConfigError::ParseError(format!("Non UTF-8 path: {path:?}")))?;

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Toml))
                }
                Some("json") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Json))
                }
                Some("yaml" | "yml") => {
                    builder.add_source(File::with_name(name).format(config::FileFormat::Yaml))
                }
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(map_external_error)?;

        let wordtrie_config: WordTrieConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        wordtrie_config.validate()?;

        tracing::debug!(?wordtrie_config, "Configuration loaded");
        Ok(wordtrie_config)
    }
}

fn map_external_error(e: ExternalConfigError) -> ConfigError {
    match e {
        ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
        ExternalConfigError::PathParse(path) => {
            ConfigError::ParseError(format!("Invalid path: {path:?}"))
        }
        ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
            "Error parsing config file {}: {cause}",
            uri.unwrap_or_default()
        )),
        ExternalConfigError::Foreign(err) => ConfigError::ParseError(err.to_string()),
        ExternalConfigError::Frozen => {
            ConfigError::ParseError("Configuration is frozen".to_string())
        }
        ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
        ExternalConfigError::Type { .. } => {
            ConfigError::ParseError("Type conversion error".to_string())
        }
    }
}
