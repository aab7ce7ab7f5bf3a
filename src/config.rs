//! Configuration for the data-structure core
//!
//! Settings are stored as TOML with sensible defaults for every key, can be
//! overridden from `DSVIZ_*` environment variables, and are validated before
//! use. Missing sections fall back to their defaults.

use crate::structures::{TraversalStrategy, MAX_LEVEL_ORDER_HEIGHT};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Upper bound accepted for `tree.max_snapshot_height`; a level-order snapshot
/// holds up to 2^(height + 1) - 1 slots.
pub const MAX_SNAPSHOT_HEIGHT_LIMIT: usize = MAX_LEVEL_ORDER_HEIGHT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Logging subsystem configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit ANSI colours
    pub ansi: bool,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

/// Binary search tree configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Recursive or explicit-stack traversals
    pub traversal: TraversalStrategy,
    /// Deepest tree a session will flatten into a level-order snapshot
    pub max_snapshot_height: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            traversal: TraversalStrategy::Recursive,
            max_snapshot_height: 12,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DsvizConfig {
    pub logging: LoggingConfig,
    pub tree: TreeConfig,
}

impl DsvizConfig {
    /// Load configuration from file, apply environment overrides and validate
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without consulting the environment
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    /// Apply environment variable overrides. Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("DSVIZ_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.logging.level = level;
            }
        }

        if let Ok(val) = env::var("DSVIZ_LOG_ANSI") {
            if let Ok(ansi) = val.parse::<bool>() {
                self.logging.ansi = ansi;
            }
        }

        if let Ok(val) = env::var("DSVIZ_TREE_TRAVERSAL") {
            if let Ok(strategy) = val.parse::<TraversalStrategy>() {
                self.tree.traversal = strategy;
            }
        }

        if let Ok(val) = env::var("DSVIZ_TREE_MAX_SNAPSHOT_HEIGHT") {
            if let Ok(height) = val.parse::<usize>() {
                self.tree.max_snapshot_height = height;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Logging level cannot be empty".to_string(),
            ));
        }

        if self.tree.max_snapshot_height == 0
            || self.tree.max_snapshot_height > MAX_SNAPSHOT_HEIGHT_LIMIT
        {
            return Err(ConfigError::Validation(format!(
                "tree.max_snapshot_height must be between 1 and {}, got {}",
                MAX_SNAPSHOT_HEIGHT_LIMIT, self.tree.max_snapshot_height
            )));
        }

        Ok(())
    }
}
