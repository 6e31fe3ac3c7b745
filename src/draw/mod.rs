//! Stroke model and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: 8-bit RGB color with predefined constants
//! - [`Point`] / [`Stroke`]: freehand polylines with a locked color and width
//! - [`Canvas`]: committed strokes plus the stroke in progress
//! - Rasterization of stroke sequences into [`Raster`] images

pub mod canvas;
pub mod color;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError};
pub use color::Color;
pub use render::{
    EXPORT_HEIGHT, EXPORT_WIDTH, Raster, RenderError, Rgba, rasterize, rasterize_with_background,
    render_point_discs, render_polyline, render_stroke, render_strokes,
};
pub use stroke::{Point, Stroke, StrokeBuilder};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
