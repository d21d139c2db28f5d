//! `mortonkey` Configuration Module
//!
//! Provides configuration file support via `mortonkey.toml` and environment
//! variables.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`MORTONKEY_*`, `__` between section and key)
//! 2. Configuration file (`mortonkey.toml`)
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::morton::MAX_INTERLEAVE_DIM;
use crate::scale::DEFAULT_MAX_GRID;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Grid configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Integer grid resolution each dimension is scaled onto.
    pub max_grid: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_grid: DEFAULT_MAX_GRID,
        }
    }
}

/// Key handling configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Reject keys whose bounding box has `min > max` or NaN bounds.
    pub validate_boxes: bool,
    /// Maximum number of dimensions a scale factor may be built with.
    pub max_dimensions: u16,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            validate_boxes: true,
            max_dimensions: (MAX_INTERLEAVE_DIM - 1) as u16,
        }
    }
}

/// Main `mortonkey` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MortonKeyConfig {
    /// Grid configuration.
    pub grid: GridConfig,
    /// Key handling configuration.
    pub keys: KeyConfig,
}

impl MortonKeyConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("mortonkey.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("MORTONKEY_").split("__").lowercase(true));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.max_grid == 0 {
            return Err(ConfigError::InvalidValue {
                key: "grid.max_grid".to_string(),
                message: "value must be > 0".to_string(),
            });
        }

        let max_dim = MAX_INTERLEAVE_DIM - 1;
        if self.keys.max_dimensions == 0 || usize::from(self.keys.max_dimensions) > max_dim {
            return Err(ConfigError::InvalidValue {
                key: "keys.max_dimensions".to_string(),
                message: format!(
                    "value {} is out of range [1, {max_dim}]",
                    self.keys.max_dimensions
                ),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
