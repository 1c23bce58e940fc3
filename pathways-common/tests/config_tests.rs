//! Configuration resolution and file handling tests
//!
//! Tests that manipulate RIASEC_PATHWAYS_CONFIG are marked #[serial] so they
//! do not race each other on the process environment.

use pathways_common::config::{
    load_toml_config, write_toml_config, ConfigResolver, ConfigSource, CONFIG_ENV_VAR,
};
use pathways_common::{EngineSettings, Error, LoggingConfig, TomlConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_config() -> TomlConfig {
    TomlConfig {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        engine: EngineSettings {
            stability_threshold: 0.2,
            cluster_boost: 1.1,
            tie_epsilon: 0.001,
        },
    }
}

#[test]
fn test_write_then_load_preserves_values() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("config.toml");

    write_toml_config(&sample_config(), &target).unwrap();
    let loaded = load_toml_config(&target).unwrap();

    assert_eq!(loaded, sample_config());
}

#[test]
fn test_write_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("config.toml");

    write_toml_config(&TomlConfig::default(), &target).unwrap();

    assert!(target.exists());
    assert!(!temp_dir.path().join("config.toml.tmp").exists());
}

#[test]
fn test_write_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested").join("dir").join("config.toml");

    write_toml_config(&TomlConfig::default(), &target).unwrap();
    assert!(target.exists());
}

#[test]
fn test_load_missing_file_is_config_error() {
    let result = load_toml_config(&PathBuf::from("/nonexistent/riasec/config.toml"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_load_malformed_toml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("bad.toml");
    fs::write(&target, "[engine\ncluster_boost = ").unwrap();

    let result = load_toml_config(&target);
    assert!(matches!(result, Err(Error::TomlParse(_))));
}

#[test]
#[serial]
fn test_cli_path_takes_priority_over_env() {
    let temp_dir = TempDir::new().unwrap();
    let cli_path = temp_dir.path().join("cli.toml");
    let env_path = temp_dir.path().join("env.toml");
    write_toml_config(&sample_config(), &cli_path).unwrap();
    write_toml_config(&TomlConfig::default(), &env_path).unwrap();

    env::set_var(CONFIG_ENV_VAR, &env_path);
    let resolver = ConfigResolver::new(Some(cli_path.clone()));
    let (config, source) = resolver.load().unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(source, ConfigSource::CommandLine(cli_path));
    assert_eq!(config, sample_config());
}

#[test]
#[serial]
fn test_env_path_used_without_cli_arg() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join("env.toml");
    write_toml_config(&sample_config(), &env_path).unwrap();

    env::set_var(CONFIG_ENV_VAR, &env_path);
    let resolver = ConfigResolver::new(None);
    let (config, source) = resolver.load().unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(source, ConfigSource::Environment(env_path));
    assert_eq!(config.engine.cluster_boost, 1.1);
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let resolver = ConfigResolver::new(Some(PathBuf::from("/nonexistent/cli.toml")));
    assert!(resolver.load().is_err());
}

#[test]
#[serial]
fn test_out_of_range_file_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[engine]\ncluster_boost = 5.0\n").unwrap();

    env::remove_var(CONFIG_ENV_VAR);
    let resolver = ConfigResolver::new(Some(path));
    let err = resolver.load().unwrap_err();
    assert!(err.to_string().contains("cluster_boost"));
}
