//! Board configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest width or height accepted from a config file.
pub const MAX_DIMENSION: usize = 64;

/// Dimensions of the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 6,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded config from {}: {}x{}",
            path.display(),
            config.width,
            config.height
        );
        Ok(config)
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be >= 1")));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }
        Ok(())
    }
}
