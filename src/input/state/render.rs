use crate::draw::{render_point_discs, render_strokes};

use super::InputState;

impl InputState {
    /// Paints the live canvas onto `ctx`.
    ///
    /// Committed strokes are drawn in order; the stroke still under the pointer
    /// is previewed as one disc per sampled point in its locked color.
    pub fn render_canvas(&self, ctx: &cairo::Context) {
        render_strokes(ctx, self.canvas.strokes());
        self.render_provisional_stroke(ctx);
    }

    /// Renders only the stroke in progress, if any.
    ///
    /// Returns `true` when something was drawn.
    pub fn render_provisional_stroke(&self, ctx: &cairo::Context) -> bool {
        match self.canvas.in_progress() {
            Some(builder) => {
                render_point_discs(ctx, builder.points(), builder.color(), builder.width());
                true
            }
            None => false,
        }
    }
}
