//! Input handling for the drawing canvas.
//!
//! This module translates drag gestures and widget changes into drawing
//! actions. It maintains the color mixer, the current stroke width, and the
//! canvas the strokes are committed to.

pub mod events;
pub mod mixer;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Channel, DragEvent};
pub use mixer::ColorMixer;
pub use state::InputState;
