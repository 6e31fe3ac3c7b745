//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the initial mixer
//! channels, the initial stroke width, and where and how drawings are exported.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig};

use crate::export::file::DEFAULT_FILENAME_PREFIX;
use crate::input::state::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest export dimension accepted, in pixels.
const MAX_EXPORT_DIMENSION: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_width = 4.0
/// initial_channels = [0.0, 0.0, 0.0]
///
/// [export]
/// width = 1080
/// height = 1920
/// directory = "~/Pictures/Sketchpad"
/// filename_prefix = "drawing"
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial drawing tool values
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Export destination and raster settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 20.0
    /// - `initial_channels`: 0.0 - 1.0 each
    /// - `export.width` / `export.height`: 1 - 8192
    /// - `filename_prefix`: non-empty, no path separators
    fn validate_and_clamp(&mut self) {
        // Width: 1.0 - 20.0
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.default_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                MIN_STROKE_WIDTH
            } else {
                self.drawing
                    .default_width
                    .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
            };
        }

        // Channels: 0.0 - 1.0
        for (i, channel) in self.drawing.initial_channels.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(&*channel) {
                log::warn!(
                    "Invalid initial_channels[{}] = {:.3}, clamping to 0.0-1.0",
                    i,
                    channel
                );
                *channel = if channel.is_nan() {
                    0.0
                } else {
                    channel.clamp(0.0, 1.0)
                };
            }
        }

        // Export size: 1 - 8192
        if !(1..=MAX_EXPORT_DIMENSION).contains(&self.export.width) {
            log::warn!(
                "Invalid export width {}, clamping to 1-{} range",
                self.export.width,
                MAX_EXPORT_DIMENSION
            );
            self.export.width = self.export.width.clamp(1, MAX_EXPORT_DIMENSION);
        }
        if !(1..=MAX_EXPORT_DIMENSION).contains(&self.export.height) {
            log::warn!(
                "Invalid export height {}, clamping to 1-{} range",
                self.export.height,
                MAX_EXPORT_DIMENSION
            );
            self.export.height = self.export.height.clamp(1, MAX_EXPORT_DIMENSION);
        }

        // Prefix must be a plain file name fragment
        let prefix = self.export.filename_prefix.trim();
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            log::warn!(
                "Invalid filename_prefix '{}', falling back to '{}'",
                self.export.filename_prefix,
                DEFAULT_FILENAME_PREFIX
            );
            self.export.filename_prefix = DEFAULT_FILENAME_PREFIX.to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
