//! Tests for configuration resolution
//!
//! Covers the CLI → ENV → TOML → default priority order and graceful
//! handling of missing config files.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions.
//! Tests that touch MODELHUB_* variables are marked with #[serial].

use modelhub_common::config::{
    CliOverrides, CompiledDefaults, ConfigResolver, BIND_ENV_VAR, CONFIG_ENV_VAR, LOG_ENV_VAR,
};
use modelhub_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(BIND_ENV_VAR);
    env::remove_var(LOG_ENV_VAR);
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("modelhub-import.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_explicit_missing_config_file_is_an_error() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();

    let cli = CliOverrides {
        config_file: Some(temp_dir.path().join("missing.toml")),
        ..Default::default()
    };
    let err = ConfigResolver::new("modelhub-import").resolve(&cli).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn test_toml_values_override_defaults() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "bind_address = \"127.0.0.1:9100\"\nevent_capacity = 16\n\n[logging]\nlevel = \"debug\"\n",
    );

    let cli = CliOverrides {
        config_file: Some(path.clone()),
        ..Default::default()
    };
    let config = ConfigResolver::new("modelhub-import").resolve(&cli).unwrap();

    assert_eq!(config.bind_address, "127.0.0.1:9100");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.event_capacity, 16);
    assert_eq!(config.source_file, Some(path));
}

#[test]
#[serial]
fn test_env_overrides_toml_and_cli_overrides_env() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "bind_address = \"127.0.0.1:9100\"\n");

    env::set_var(CONFIG_ENV_VAR, &path);
    env::set_var(BIND_ENV_VAR, "127.0.0.1:9200");
    env::set_var(LOG_ENV_VAR, "warn");

    let resolver = ConfigResolver::new("modelhub-import");

    let from_env = resolver.resolve(&CliOverrides::default()).unwrap();
    assert_eq!(from_env.bind_address, "127.0.0.1:9200");
    assert_eq!(from_env.log_level, "warn");
    assert_eq!(from_env.source_file, Some(path));

    let from_cli = resolver
        .resolve(&CliOverrides {
            bind_address: Some("127.0.0.1:9300".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(from_cli.bind_address, "127.0.0.1:9300");

    clear_env();
}

#[test]
#[serial]
fn test_zero_event_capacity_falls_back_to_default() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "event_capacity = 0\n");

    let defaults = CompiledDefaults {
        event_capacity: 7,
        ..Default::default()
    };
    let config = ConfigResolver::new("modelhub-import")
        .with_defaults(defaults)
        .resolve(&CliOverrides {
            config_file: Some(path),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(config.event_capacity, 7);
}
