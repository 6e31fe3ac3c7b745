mod actions;
mod core;
mod drag;
mod render;

pub use self::core::{DEFAULT_STROKE_WIDTH, InputState, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
