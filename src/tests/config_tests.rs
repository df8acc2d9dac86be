//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    ConfigLoader, DictionaryConfig, LogConfig, PrefixTestConfig, Validate, WordTrieConfig,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordTrieConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.path, PathBuf::from("dictionary.csv"));
    assert_eq!(config.dictionary.history_path, PathBuf::from("history.txt"));
    assert_eq!(config.prefix_test.input_path, PathBuf::from("testPrefix.txt"));
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = WordTrieConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.dictionary.path = PathBuf::new();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingValue(key)) if key == "dictionary.path"
    ));
}

/// Test the path collision rules of each section.
#[test]
fn test_specific_validation_rules() {
    let dictionary = DictionaryConfig {
        path: PathBuf::from("words.csv"),
        history_path: PathBuf::from("words.csv"),
    };
    assert!(dictionary.validate().is_err());

    let prefix_test = PrefixTestConfig {
        input_path: PathBuf::from("queries.txt"),
        output_path: PathBuf::from("queries.txt"),
    };
    assert!(prefix_test.validate().is_err());

    let log = LogConfig {
        level: "trace".to_string(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtrie.toml",
            r#"
            [dictionary]
            path = "data/english.csv"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("data/english.csv"));
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.dictionary.history_path, PathBuf::from("history.txt"));
    assert_eq!(config.prefix_test, PrefixTestConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtrie.toml",
            r#"
            [dictionary]
            path = "from-file.csv"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__DICTIONARY__PATH", "from-env.csv");
    fixture.set_env("TEST_ENV__PREFIX_TEST__OUTPUT_PATH", "counts.txt");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("from-env.csv"));
    assert_eq!(config.prefix_test.output_path, PathBuf::from("counts.txt"));
}

/// Test that a missing or broken file is reported.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let missing = ConfigLoader::new(Some(fixture.path("absent.toml")), "TEST_MISSING");
    assert!(matches!(missing.load(), Err(ConfigError::FileNotFound(_))));

    let broken_path = fixture
        .write_file("broken.toml", "[dictionary\npath = oops\"")
        .unwrap();
    let broken = ConfigLoader::new(Some(&broken_path), "TEST_INVALID");
    assert!(matches!(broken.load(), Err(ConfigError::ParseError(_))));

    let unsupported = fixture.write_file("config.ini", "x=1").unwrap();
    let loader = ConfigLoader::new(Some(&unsupported), "TEST_UNSUPPORTED");
    assert!(loader.load().is_err());
}

/// Test that values loaded from a file are validated.
#[test]
fn test_loaded_config_is_validated() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordtrie.json",
            r#"{ "log": { "level": "loud" } }"#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_VALIDATED");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}
