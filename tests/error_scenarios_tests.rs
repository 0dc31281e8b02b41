//! Error scenario and edge case tests
//!
//! Run with: cargo test --test error_scenarios_tests

use onelogin_aws_connector::config::{self, Config, ConfigFile, ServiceConfig};
use onelogin_aws_connector::error::Error;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Load Errors
// ============================================================================

#[test]
fn test_error_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is [ not valid toml").unwrap();

    let err = config::load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);

    let msg = err.to_string();
    assert!(msg.contains("TOML parse error"));
    assert!(msg.contains("config.toml"));
    println!("✓ TOML parse error: {}", msg);
}

#[test]
fn test_error_wrong_section_type() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[service]\ndefault = \"not a table\"\n").unwrap();

    let err = ConfigFile::load(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_error_duplicate_profile() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[service.default]\nendpoint = \"a\"\n\n[service.default]\nendpoint = \"b\"\n",
    )
    .unwrap();

    let err = config::load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_error_path_is_directory() {
    let temp = TempDir::new().unwrap();

    // Not "absent": reading a directory must surface an IO error
    let err = config::load_config_from_path(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {:?}", err);
}

// ============================================================================
// Save Errors
// ============================================================================

#[test]
fn test_error_save_into_missing_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing").join("config.toml");

    let file = ConfigFile::load(&path).unwrap();
    let err = file.save().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!temp.path().join("missing").exists(), "Store must not create directories");
}

#[test]
fn test_error_save_over_directory_keeps_original() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("config.toml");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    let mut config = Config::default();
    config.set_service("default", ServiceConfig::default());

    let err = config::save_config_to_path(&config, &target).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(target.join("keep").exists());

    // The failed temp file is cleaned up
    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_error_profile_not_found_message() {
    let err = Error::ProfileNotFound {
        kind: "service",
        name: "prod".to_string(),
    };
    assert_eq!(err.to_string(), "service profile 'prod' not found");
}

#[test]
fn test_error_no_config_path_message() {
    let msg = Error::NoConfigPath.to_string();
    assert!(msg.contains("ONELOGIN_AWS_CONFIG"));
}
