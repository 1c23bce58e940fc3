//! # RIASEC Pathways Common Library
//!
//! Shared code for the pathway engine and its consumers:
//! - RIASEC trait codes and raw score types
//! - Error types
//! - Configuration loading (TOML bootstrap + engine tuning)

pub mod config;
pub mod error;
pub mod riasec;

pub use config::{EngineSettings, LoggingConfig, TomlConfig};
pub use error::{Error, Result};
pub use riasec::{RiasecCode, RiasecScore};
