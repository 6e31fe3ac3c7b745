//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::export::file::{self, DEFAULT_FILENAME_PREFIX, ExportSettings};
use crate::input::state::DEFAULT_STROKE_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the mixer and width slider values when the canvas first opens.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Initial mixer channels as [red, green, blue], each 0.0 - 1.0
    #[serde(default = "default_channels")]
    pub initial_channels: [f64; 3],
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            initial_channels: default_channels(),
        }
    }
}

/// Export settings.
///
/// Exports are rendered at a fixed resolution that does not depend on the
/// on-screen canvas size; stroke coordinates are not scaled.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Raster width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_export_width")]
    pub width: u32,

    /// Raster height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_export_height")]
    pub height: u32,

    /// Directory to write exports to (supports `~/`). Defaults to the
    /// platform picture directory.
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename prefix; files are named `<prefix>_<unix millis>.png`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Optional opaque background; omit for a transparent PNG
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: default_export_width(),
            height: default_export_height(),
            directory: None,
            filename_prefix: default_filename_prefix(),
            background: None,
        }
    }
}

impl ExportConfig {
    /// Resolves this section into runtime export settings.
    pub fn to_settings(&self) -> ExportSettings {
        ExportSettings {
            directory: self
                .directory
                .as_deref()
                .map(file::expand_tilde)
                .unwrap_or_else(file::default_export_directory),
            filename_prefix: self.filename_prefix.clone(),
            width: self.width,
            height: self.height,
            background: self.background.as_ref().map(ColorSpec::to_color),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_channels() -> [f64; 3] {
    [0.0, 0.0, 0.0]
}

fn default_export_width() -> u32 {
    EXPORT_WIDTH
}

fn default_export_height() -> u32 {
    EXPORT_HEIGHT
}

fn default_filename_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}
