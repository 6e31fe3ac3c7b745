//! 8-bit RGB color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an opaque RGB color with 8-bit channels.
///
/// Strokes lock in one of these when they start; the mixer produces them
/// from its floating-point channel values.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let orange = Color::new(255, 128, 0);
/// assert_eq!(Color::from_channels(1.0, 0.5, 0.0), orange);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
}

impl Color {
    /// Creates a new color from 8-bit components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unit-range channel values (0.0 - 1.0).
    pub fn from_channels(red: f64, green: f64, blue: f64) -> Self {
        Self {
            r: channel_to_u8(red),
            g: channel_to_u8(green),
            b: channel_to_u8(blue),
        }
    }

    /// Returns the components as Cairo-style floats in the 0.0 - 1.0 range.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// Converts a unit-range channel value to its 8-bit equivalent, rounding to nearest.
///
/// Out-of-range input saturates at 0 or 255.
pub fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0 + 0.5) as u8
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (255, 0, 0)
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined green color (0, 255, 0)
pub const GREEN: Color = Color::new(0, 255, 0);

/// Predefined blue color (0, 0, 255)
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color (255, 255, 0)
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined orange color (255, 128, 0)
pub const ORANGE: Color = Color::new(255, 128, 0);

/// Predefined pink/magenta color (255, 0, 255)
pub const PINK: Color = Color::new(255, 0, 255);

/// Predefined white color (255, 255, 255)
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined black color (0, 0, 0)
pub const BLACK: Color = Color::new(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_conversion_rounds_to_nearest() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.5), 128);
        assert_eq!(channel_to_u8(0.2), 51);
    }

    #[test]
    fn channel_conversion_saturates() {
        assert_eq!(channel_to_u8(-3.0), 0);
        assert_eq!(channel_to_u8(7.5), 255);
    }

    #[test]
    fn to_unit_maps_full_channels_to_one() {
        assert_eq!(WHITE.to_unit(), (1.0, 1.0, 1.0));
        assert_eq!(BLACK.to_unit(), (0.0, 0.0, 0.0));
    }
}
