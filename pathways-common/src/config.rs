//! Configuration loading and resolution
//!
//! Bootstrap configuration is a small TOML file with two sections:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [engine]
//! stability_threshold = 0.12
//! cluster_boost = 1.05
//! tie_epsilon = 0.0001
//! ```
//!
//! Every key is optional. Missing keys fall back to built-in defaults.
//!
//! # Resolution Priority
//!
//! 1. Command-line argument (explicit path, must exist)
//! 2. Environment variable `RIASEC_PATHWAYS_CONFIG` (explicit path, must exist)
//! 3. Platform config directory (`<config_dir>/riasec-pathways/config.toml`)
//! 4. Built-in defaults
//!
//! A missing file at the platform location is not an error: a warning is
//! logged and defaults are used.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "RIASEC_PATHWAYS_CONFIG";

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "riasec-pathways";

const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Engine tuning (optional)
    #[serde(default)]
    pub engine: EngineSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Tunable constants of the ranking and stability stage
///
/// The static tables (weights, conflict rules, clusters, personas) are not
/// configurable; only the numeric knobs of the re-ranking pass are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Stability margin below which the cluster boost is applied
    ///
    /// Valid range: [0.0, 1.0]
    /// Default: 0.12
    #[serde(default = "default_stability_threshold")]
    pub stability_threshold: f64,

    /// Multiplier applied to members of the dominant code's cluster
    ///
    /// Valid range: [1.0, 2.0]
    /// Default: 1.05
    #[serde(default = "default_cluster_boost")]
    pub cluster_boost: f64,

    /// Two scores closer than this are ranked by dominant-code weight instead
    ///
    /// Valid range: [0.0, 0.01]
    /// Default: 0.0001
    #[serde(default = "default_tie_epsilon")]
    pub tie_epsilon: f64,
}

fn default_stability_threshold() -> f64 {
    0.12
}

fn default_cluster_boost() -> f64 {
    1.05
}

fn default_tie_epsilon() -> f64 {
    0.0001
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            stability_threshold: default_stability_threshold(),
            cluster_boost: default_cluster_boost(),
            tie_epsilon: default_tie_epsilon(),
        }
    }
}

impl EngineSettings {
    /// Validate every value against its range
    pub fn validate(&self) -> Result<()> {
        check_range("stability_threshold", self.stability_threshold, 0.0, 1.0)?;
        check_range("cluster_boost", self.cluster_boost, 1.0, 2.0)?;
        check_range("tie_epsilon", self.tie_epsilon, 0.0, 0.01)?;
        Ok(())
    }
}

fn check_range(key: &str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails `contains`, so it is rejected here too
    if !(min..=max).contains(&value) {
        return Err(Error::Config(format!(
            "{}: value {} out of range [{}, {}]",
            key, value, min, max
        )));
    }
    Ok(())
}

impl TomlConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "logging.level: '{}' is not one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }
        self.engine.validate()
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine(PathBuf),
    Environment(PathBuf),
    PlatformDefault(PathBuf),
    BuiltIn,
}

/// Resolves and loads the configuration file
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create resolver with optional command-line path
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Determine which configuration source applies
    ///
    /// Explicit sources (command line, environment) are returned whether or
    /// not the file exists so that `load` can report the missing file.
    pub fn resolve(&self) -> ConfigSource {
        if let Some(path) = &self.cli_path {
            return ConfigSource::CommandLine(path.clone());
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return ConfigSource::Environment(PathBuf::from(path));
            }
        }

        match platform_config_path() {
            Some(path) if path.exists() => ConfigSource::PlatformDefault(path),
            Some(path) => {
                warn!(
                    "No config file at {}, using built-in defaults",
                    path.display()
                );
                ConfigSource::BuiltIn
            }
            None => ConfigSource::BuiltIn,
        }
    }

    /// Resolve and load the configuration, validated
    pub fn load(&self) -> Result<(TomlConfig, ConfigSource)> {
        let source = self.resolve();
        let config = match &source {
            ConfigSource::CommandLine(path)
            | ConfigSource::Environment(path)
            | ConfigSource::PlatformDefault(path) => load_toml_config(path)?,
            ConfigSource::BuiltIn => TomlConfig::default(),
        };
        config.validate()?;
        info!("Configuration loaded from {:?}", source);
        Ok((config, source))
    }
}

/// Platform config file location (`<config_dir>/riasec-pathways/config.toml`)
pub fn platform_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read and parse a TOML configuration file (not validated)
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Write configuration atomically (temp file + rename)
///
/// Creates parent directories if needed.
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, content)?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::Io(e));
    }
    Ok(())
}
