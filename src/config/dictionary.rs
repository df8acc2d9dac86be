//! Dictionary configuration module.
//!
//! File locations for the word list, the search history and the batch
//! prefix test. Relative paths resolve against the working directory.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Word list and history configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to the comma-delimited word list
    pub path: PathBuf,

    /// Path to the append-only search history
    pub history_path: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dictionary.csv"),
            history_path: PathBuf::from("history.txt"),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_path(&self.path, "dictionary.path")?;
        require_path(&self.history_path, "dictionary.history_path")?;

        if self.path == self.history_path {
            return Err(ConfigError::ValidationError(
                "dictionary.history_path must differ from dictionary.path".to_string(),
            ));
        }

        Ok(())
    }
}

/// Batch prefix test configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrefixTestConfig {
    /// Fixture with one query per line
    pub input_path: PathBuf,

    /// File the counts are appended to
    pub output_path: PathBuf,
}

impl Default for PrefixTestConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("testPrefix.txt"),
            output_path: PathBuf::from("testPrefixResult.txt"),
        }
    }
}

impl Validate for PrefixTestConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_path(&self.input_path, "prefix_test.input_path")?;
        require_path(&self.output_path, "prefix_test.output_path")?;

        if self.input_path == self.output_path {
            return Err(ConfigError::ValidationError(
                "prefix_test.output_path must differ from prefix_test.input_path".to_string(),
            ));
        }

        Ok(())
    }
}

fn require_path(path: &Path, key: &str) -> ConfigResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingValue(key.to_string()));
    }
    Ok(())
}
