//! FILENAME: tests/test_config.rs
//! Integration tests for config loading.

use std::io::Write;

use app_lib::{AppConfig, ConfigError};
use log::LevelFilter;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    assert_eq!(config.engine.history_limit, 100);
    assert_eq!(config.engine.max_entry_length, None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"logLevel": "debug", "engine": {{"maxEntryLength": 30}}}}"#).unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    assert_eq!(config.engine.max_entry_length, Some(30));
    assert_eq!(config.engine.history_limit, 100);
    assert_eq!(config.log_file, None);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_bad_log_level_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"logLevel": "loud"}}"#).unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "loud"));
}
