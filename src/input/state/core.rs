//! Drawing session state.

use crate::config::Config;
use crate::draw::Canvas;
use crate::input::mixer::ColorMixer;

/// Smallest stroke width the width slider allows, in pixels.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Largest stroke width the width slider allows, in pixels.
pub const MAX_STROKE_WIDTH: f64 = 20.0;
/// Stroke width used when nothing else is configured.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Main input state containing all drawing session state.
///
/// Owns the canvas (committed strokes plus the stroke in progress), the color
/// mixer, and the current stroke width. Widget and pointer collaborators call
/// into it; a UI layer polls `needs_redraw` to know when to repaint.
#[derive(Debug)]
pub struct InputState {
    /// Committed strokes and the stroke under the pointer
    pub canvas: Canvas,
    /// RGB channel sliders
    pub mixer: ColorMixer,
    /// Width in pixels given to the next stroke that starts
    pub current_width: f64,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `mixer` - Initial channel values
    /// * `width` - Initial stroke width in pixels (clamped to the slider range)
    pub fn with_defaults(mixer: ColorMixer, width: f64) -> Self {
        let mut state = Self {
            canvas: Canvas::new(),
            mixer,
            current_width: DEFAULT_STROKE_WIDTH,
            needs_redraw: true,
        };
        state.set_stroke_width(width);
        state
    }

    /// Creates an InputState from the `[drawing]` section of the config.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            ColorMixer::from_channels(config.drawing.initial_channels),
            config.drawing.default_width,
        )
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(ColorMixer::new(), DEFAULT_STROKE_WIDTH)
    }
}
