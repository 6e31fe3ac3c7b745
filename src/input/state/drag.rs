use crate::draw::Point;
use crate::input::events::DragEvent;
use log::{debug, warn};

use super::InputState;

impl InputState {
    /// Dispatches one drag-gesture event to the matching handler.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start(point) => self.on_drag_start(point),
            DragEvent::Move(point) => self.on_drag_move(point),
            DragEvent::End => self.on_drag_end(),
        }
    }

    /// Processes the start of a drag gesture.
    ///
    /// # Behavior
    /// Begins a new stroke at `point` using the mixer's current color and the
    /// current stroke width. An earlier stroke that never saw its drag end is
    /// discarded.
    pub fn on_drag_start(&mut self, point: Point) {
        let color = self.mixer.current_color();
        match self.canvas.begin_stroke(point, color, self.current_width) {
            Ok(()) => self.needs_redraw = true,
            Err(err) => warn!("Ignoring drag start at ({}, {}): {}", point.x, point.y, err),
        }
    }

    /// Processes pointer motion while dragging.
    ///
    /// Motion without a preceding drag start is ignored.
    pub fn on_drag_move(&mut self, point: Point) {
        match self.canvas.extend_stroke(point) {
            Ok(()) => self.needs_redraw = true,
            Err(err) => debug!("Ignoring drag move: {}", err),
        }
    }

    /// Processes the end of a drag gesture, committing the stroke in progress.
    pub fn on_drag_end(&mut self) {
        if self.canvas.commit_stroke() {
            debug!("Committed stroke #{}", self.canvas.strokes().len());
            self.needs_redraw = true;
        } else {
            debug!("Drag ended with no stroke in progress");
        }
    }
}
