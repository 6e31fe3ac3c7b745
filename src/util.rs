//! Utility functions for color naming.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Formats a color as `#rrggbb`.
pub fn color_to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mapping_is_case_insensitive() {
        assert_eq!(name_to_color("RED").unwrap(), RED);
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_formatting_pads_channels() {
        assert_eq!(color_to_hex(Color::new(255, 8, 0)), "#ff0800");
        assert_eq!(color_to_hex(BLACK), "#000000");
    }
}
