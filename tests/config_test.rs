//! Tests for loading configuration files.

use std::io::Write;
use std::path::Path;
use strictly_rewind::{AppConfig, Player};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_player = \"O\"\nlog_filter = \"debug\"").expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_hints());
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = AppConfig::load(None).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(dir.path().join("missing.toml").as_path())).expect_err("no file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_hints = maybe").expect("write config");

    let err = AppConfig::from_file(file.path()).expect_err("bad toml");
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    assert!(Path::new(err.file).ends_with("config.rs"));
}
