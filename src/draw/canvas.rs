//! Canvas container holding committed strokes and the stroke in progress.

use super::color::Color;
use super::stroke::{Point, Stroke, StrokeBuilder};
use std::sync::Arc;
use thiserror::Error;

/// Errors produced by the stroke model.
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    #[error("No stroke is in progress")]
    NoStrokeInProgress,

    #[error("Stroke width must be a positive number, got {0}")]
    InvalidWidth(f64),
}

/// All strokes of the current drawing session.
///
/// Committed strokes are kept in draw order (first = bottom layer, last = top
/// layer) and only ever appended to or cleared wholesale. At most one stroke
/// is under construction at a time.
#[derive(Debug, Default)]
pub struct Canvas {
    strokes: Vec<Stroke>,
    in_progress: Option<StrokeBuilder>,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke at `start`, locking in `color` and `width`.
    ///
    /// Any stroke still in progress is dropped without being committed.
    pub fn begin_stroke(
        &mut self,
        start: Point,
        color: Color,
        width: f64,
    ) -> Result<(), CanvasError> {
        let builder =
            StrokeBuilder::new(start, color, width).ok_or(CanvasError::InvalidWidth(width))?;
        if let Some(previous) = self.in_progress.replace(builder) {
            log::debug!(
                "Discarding uncommitted stroke with {} points",
                previous.points().len()
            );
        }
        Ok(())
    }

    /// Appends `point` to the stroke in progress.
    pub fn extend_stroke(&mut self, point: Point) -> Result<(), CanvasError> {
        let builder = self
            .in_progress
            .as_mut()
            .ok_or(CanvasError::NoStrokeInProgress)?;
        builder.push(point);
        Ok(())
    }

    /// Moves the stroke in progress to the end of the committed sequence.
    ///
    /// Returns `true` if a stroke was committed, `false` if none was in progress.
    pub fn commit_stroke(&mut self) -> bool {
        match self.in_progress.take() {
            Some(builder) => {
                self.strokes.push(builder.finish());
                true
            }
            None => false,
        }
    }

    /// Removes every committed stroke. The stroke in progress is left alone.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
    }

    /// Committed strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The stroke currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        self.in_progress.as_ref()
    }

    /// Copies the committed strokes into an immutable, shareable snapshot.
    pub fn snapshot(&self) -> Arc<[Stroke]> {
        Arc::from(self.strokes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn commit_without_stroke_is_noop() {
        let mut canvas = Canvas::new();
        assert!(!canvas.commit_stroke());
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn extend_without_stroke_reports_invalid_state() {
        let mut canvas = Canvas::new();
        assert_eq!(
            canvas.extend_stroke(Point::new(1.0, 2.0)),
            Err(CanvasError::NoStrokeInProgress)
        );
        assert!(canvas.in_progress().is_none());
    }

    #[test]
    fn begin_discards_previous_uncommitted_stroke() {
        let mut canvas = Canvas::new();
        canvas.begin_stroke(Point::new(0.0, 0.0), RED, 2.0).unwrap();
        canvas.extend_stroke(Point::new(4.0, 4.0)).unwrap();
        canvas.begin_stroke(Point::new(9.0, 9.0), BLUE, 5.0).unwrap();
        assert!(canvas.commit_stroke());

        assert_eq!(canvas.strokes().len(), 1);
        let stroke = &canvas.strokes()[0];
        assert_eq!(stroke.points(), &[Point::new(9.0, 9.0)]);
        assert_eq!(stroke.color(), BLUE);
        assert_eq!(stroke.width(), 5.0);
    }

    #[test]
    fn begin_with_invalid_width_keeps_state() {
        let mut canvas = Canvas::new();
        assert_eq!(
            canvas.begin_stroke(Point::default(), RED, 0.0),
            Err(CanvasError::InvalidWidth(0.0))
        );
        assert!(canvas.in_progress().is_none());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut canvas = Canvas::new();
        canvas.begin_stroke(Point::new(1.0, 1.0), RED, 2.0).unwrap();
        canvas.commit_stroke();

        let snapshot = canvas.snapshot();
        canvas.clear_all();

        assert_eq!(snapshot.len(), 1);
        assert!(canvas.strokes().is_empty());
    }
}
