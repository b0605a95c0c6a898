//! Integration tests for configuration persistence.

use std::path::PathBuf;
use urxvt_launch_config::{Config, ConfigError};

#[test]
fn test_config_yaml_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");

    let config = Config::default()
        .with_font_family("Iosevka Term")
        .with_size(15);
    config.save_to(&path).expect("save should succeed");

    let loaded = Config::load_from(&path).expect("load should succeed");
    assert_eq!(loaded, config, "saved and reloaded config should be equal");
}

#[test]
fn test_config_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("config.yaml");

    Config::default().save_to(&path).expect("save should succeed");
    assert!(path.exists(), "config file should exist after save");
}

#[test]
fn test_config_load_missing_file_is_read_error() {
    let result = Config::load_from(&PathBuf::from("/nonexistent/urxvt-launch/config.yaml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_config_load_rejects_invalid_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "font_family: [unterminated").expect("write");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "size: 20\n").expect("write");

    let loaded = Config::load_from(&path).expect("load should succeed");
    assert_eq!(loaded.size, 20);
    assert_eq!(
        loaded.font_family, "DejaVuSansMono Nerd Font Mono",
        "missing fields should fall back to defaults"
    );
}
