use std::fs;

use tempfile::TempDir;
use tunefeed::config::{Config, ConfigError};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.source.latency_ms, 1000);
    assert_eq!(config.source.page_count, 2);
    assert_eq!(config.pagination.fetch_timeout_ms, 10_000);
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tunefeed/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[source]
latency_ms = 0

[logging]
filter = "tunefeed=debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.latency_ms, 0);
    assert_eq!(config.source.page_count, 2);
    assert_eq!(config.pagination.fetch_timeout_ms, 10_000);
    assert_eq!(config.logging.filter, "tunefeed=debug");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[source\nlatency_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[pagination]\nfetch_timeout_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("fetch_timeout_ms"));
}

#[test]
fn test_zero_pages_fails_validation() {
    let mut config = Config::default();
    config.source.page_count = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
