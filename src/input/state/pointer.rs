//! Pointer event handling for the gesture state machine.

use crate::draw::{render_segment, render_shape, Canvas, CanvasError, Shape};

use super::{Controller, GestureState};

impl Controller {
    /// Starts a gesture: captures the anchor point and a snapshot of the
    /// buffer, then enters the Drawing state.
    ///
    /// A pointer-down while a gesture is already active is ignored; the
    /// single-pointer model allows at most one gesture at a time.
    pub(super) fn on_pointer_down(
        &mut self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
    ) -> Result<(), CanvasError> {
        if self.is_drawing() {
            return Ok(());
        }

        let snapshot = canvas.snapshot()?;
        self.state = GestureState::Drawing {
            anchor_x: x,
            anchor_y: y,
            last_x: x,
            last_y: y,
            snapshot,
        };
        log::trace!("Gesture started at ({x:.1}, {y:.1}) with {:?}", self.tool);
        Ok(())
    }

    /// Extends the active gesture to a new pointer position.
    ///
    /// Freehand tools commit a segment from the last stroked point and are
    /// cumulative and irreversible within the gesture. Shape tools restore
    /// the pre-gesture snapshot first, then draw exactly one shape from the
    /// anchor to the new position, so the preview replaces itself each step.
    ///
    /// Moves with no active gesture are no-ops.
    pub(super) fn on_pointer_move(
        &mut self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
    ) -> Result<(), CanvasError> {
        let GestureState::Drawing {
            anchor_x,
            anchor_y,
            last_x,
            last_y,
            snapshot,
        } = &mut self.state
        else {
            return Ok(());
        };

        if self.tool.is_freehand() {
            let color = if self.tool == crate::input::Tool::Eraser {
                self.background_color
            } else {
                self.stroke_color
            };
            let (x1, y1) = (*last_x, *last_y);
            let width = self.brush_width;
            canvas.with_context(|ctx| render_segment(ctx, x1, y1, x, y, color, width))?;
            *last_x = x;
            *last_y = y;
            return Ok(());
        }

        let (ax, ay) = (*anchor_x, *anchor_y);
        let Some(shape) = Shape::from_drag(
            self.tool,
            ax,
            ay,
            x,
            y,
            self.arrow_head_length,
            self.arrow_head_angle,
        ) else {
            return Ok(());
        };

        // Discard the previous preview frame, then draw the new one
        canvas.restore(snapshot)?;
        let style = self.shape_style();
        canvas.with_context(|ctx| render_shape(ctx, &shape, &style))?;
        Ok(())
    }

    /// Ends the active gesture. The last committed frame stands; the snapshot
    /// is dropped with the gesture state.
    pub(super) fn end_gesture(&mut self) {
        if self.is_drawing() {
            log::trace!("Gesture ended");
            self.state = GestureState::Idle;
        }
    }
}
