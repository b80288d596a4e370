//! Editor configuration.

use crate::selection::{HANDLE_HIT_TOLERANCE, MIN_SHAPE_SIZE};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Storage key the last design is saved under.
pub const DESIGN_KEY: &str = "design";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for an editing session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Smallest width/height a resize may produce.
    pub min_shape_size: f64,
    /// Radius around a handle that still counts as hitting it.
    pub handle_tolerance: f64,
    /// Top-left corner of shapes added without a drop point.
    pub default_position: Point,
    /// Width and height of newly added shapes.
    pub default_shape_size: f64,
    /// Key the design is persisted under.
    pub storage_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            min_shape_size: MIN_SHAPE_SIZE,
            handle_tolerance: HANDLE_HIT_TOLERANCE,
            default_position: Point::new(50.0, 50.0),
            default_shape_size: 100.0,
            storage_key: DESIGN_KEY.to_string(),
        }
    }
}

impl EditorConfig {
    /// Canvas dimensions.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save config to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_positive(self.canvas_width) || !is_positive(self.canvas_height) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !is_non_negative(self.min_shape_size) {
            return Err(ConfigError::Invalid("min_shape_size must be >= 0".to_string()));
        }
        if !is_non_negative(self.handle_tolerance) {
            return Err(ConfigError::Invalid("handle_tolerance must be >= 0".to_string()));
        }
        if !is_positive(self.default_shape_size) {
            return Err(ConfigError::Invalid("default_shape_size must be > 0".to_string()));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
