//! Game configuration loaded from JSON.

use crate::alphabet::Alphabet;
use crate::generator::DEFAULT_MAX_ATTEMPTS;
use crate::style::Palette;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything needed to build and lay out a board.
///
/// Missing fields fall back to [`GameConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Words to hide in the grid.
    pub words: Vec<String>,
    pub alphabet: Alphabet,
    /// Start cells tried per word before generation fails.
    pub max_placement_attempts: usize,
    /// Drawable surface width in pixels.
    pub surface_width: f64,
    /// Drawable surface height in pixels.
    pub surface_height: f64,
    /// Fixed RNG seed for reproducible boards.
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            words: Vec::new(),
            alphabet: Alphabet::default(),
            max_placement_attempts: DEFAULT_MAX_ATTEMPTS,
            surface_width: 500.0,
            surface_height: 500.0,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json).map_err(|e| match e {
            ConfigError::Parse(msg) => ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), msg)),
            other => other,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as JSON.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Check values the generator can't work with.
    ///
    /// The word list may be empty here; callers that generate immediately get
    /// that error from the generator instead.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!("grid must be at least 1x1, got {}x{}", self.rows, self.cols)));
        }
        if !(self.surface_width > 0.0 && self.surface_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "surface must be positive, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("max_placement_attempts must be at least 1".to_string()));
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::Invalid("alphabet has no letters".to_string()));
        }
        Ok(())
    }

    pub fn surface(&self) -> Size {
        Size::new(self.surface_width, self.surface_height)
    }
}
