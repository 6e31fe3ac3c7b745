//! Point and stroke definitions for freehand drawing.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A 2D coordinate in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// One committed freehand gesture.
///
/// A stroke always holds at least one point, in the order they were drawn.
/// Color and width are fixed when the gesture starts and the stroke cannot be
/// modified once it has been built.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl Stroke {
    /// Points traced by the gesture, first to last.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Stroke color locked in at gesture start.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Line width in pixels locked in at gesture start.
    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Accumulates points for the stroke currently under the pointer.
#[derive(Clone, Debug)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl StrokeBuilder {
    /// Starts a new stroke anchored at `start`.
    ///
    /// Returns `None` when `width` is not a finite positive number.
    pub fn new(start: Point, color: Color, width: f64) -> Option<Self> {
        if !width.is_finite() || width <= 0.0 {
            return None;
        }
        Some(Self {
            points: vec![start],
            color,
            width,
        })
    }

    /// Appends a point to the end of the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Seals the accumulated points into an immutable [`Stroke`].
    pub fn finish(self) -> Stroke {
        Stroke {
            points: self.points,
            color: self.color,
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn builder_keeps_insertion_order() {
        let mut builder = StrokeBuilder::new(Point::new(1.0, 1.0), RED, 3.0).unwrap();
        builder.push(Point::new(5.0, 2.0));
        builder.push(Point::new(3.0, 9.0));

        let stroke = builder.finish();
        assert_eq!(
            stroke.points(),
            &[
                Point::new(1.0, 1.0),
                Point::new(5.0, 2.0),
                Point::new(3.0, 9.0)
            ]
        );
        assert_eq!(stroke.color(), RED);
        assert_eq!(stroke.width(), 3.0);
    }

    #[test]
    fn builder_rejects_non_positive_width() {
        assert!(StrokeBuilder::new(Point::default(), RED, 0.0).is_none());
        assert!(StrokeBuilder::new(Point::default(), RED, -2.0).is_none());
        assert!(StrokeBuilder::new(Point::default(), RED, f64::NAN).is_none());
    }
}
