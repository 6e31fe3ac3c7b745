use crate::export::{ExportError, ExportManager, ExportResult};
use crate::input::events::Channel;

use super::InputState;
use super::core::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

impl InputState {
    /// Sets one mixer channel (red, green, or blue slider moved).
    ///
    /// Only strokes started afterwards pick up the new color.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        self.mixer.set_channel(channel, value);
        self.needs_redraw = true;
    }

    /// Sets the width used for the next stroke, clamped to 1.0 - 20.0.
    pub fn set_stroke_width(&mut self, width: f64) {
        let clamped = if width.is_nan() {
            MIN_STROKE_WIDTH
        } else {
            width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        };
        if clamped != width {
            log::warn!(
                "Stroke width {:.1} outside {:.1}-{:.1} range, using {:.1}",
                width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH,
                clamped
            );
        }
        self.current_width = clamped;
        self.needs_redraw = true;
    }

    /// Clears all committed strokes (the "clear" button).
    pub fn clear_all(&mut self) {
        let removed = self.canvas.strokes().len();
        self.canvas.clear_all();
        log::info!("Cleared {} strokes", removed);
        self.needs_redraw = true;
    }

    /// Queues an export of the committed strokes as they are right now.
    ///
    /// The stroke sequence is snapshotted before this returns, so drawing or
    /// clearing afterwards does not affect the exported image. Returns the
    /// filename the export will be written to.
    pub fn request_export(&self, manager: &ExportManager) -> Result<String, ExportError> {
        let snapshot = self.canvas.snapshot();
        log::info!("Requesting export of {} strokes", snapshot.len());
        manager.request_export(snapshot)
    }

    /// Exports the committed strokes and waits for the result.
    ///
    /// The export worker logs failures; canvas state is never rolled back.
    pub async fn export_now(&self, manager: &ExportManager) -> Result<ExportResult, ExportError> {
        let snapshot = self.canvas.snapshot();
        log::info!("Exporting {} strokes", snapshot.len());
        manager.export_now(snapshot).await
    }
}
