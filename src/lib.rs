//! Library exports for the sketchpad drawing core.
//!
//! Exposes the stroke model, color mixer, rasterizer, and PNG exporter so that
//! any UI shell (or the bundled script driver) can drive a drawing session.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
