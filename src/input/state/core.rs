//! Drawing controller: style state and the gesture state machine.

use crate::config::Config;
use crate::draw::{Canvas, CanvasError, Color, ShapeStyle, Snapshot};
use crate::input::events::{ControlChange, InputEvent};
use crate::input::tool::Tool;

/// Current gesture state machine.
///
/// At most one gesture is in progress at any time; no gesture state outlives
/// the pointer-up or pointer-leave event that ends it.
#[derive(Debug)]
pub enum GestureState {
    /// Not actively drawing - waiting for pointer input
    Idle,
    /// Actively drawing (pointer held down)
    Drawing {
        /// Anchor X coordinate (where the pointer went down)
        anchor_x: f64,
        /// Anchor Y coordinate (where the pointer went down)
        anchor_y: f64,
        /// Last stroked X coordinate (freehand segment chaining)
        last_x: f64,
        /// Last stroked Y coordinate (freehand segment chaining)
        last_y: f64,
        /// Buffer contents at gesture start, restored before each
        /// shape-preview frame
        snapshot: Snapshot,
    },
}

/// Canvas drawing controller.
///
/// Holds the current tool and style state, translates [`InputEvent`]s into
/// canvas operations, and manages the clear/background/save session controls.
/// The canvas itself is owned by the host and passed into `handle_event`,
/// mirroring how the buffer belongs to the display surface rather than to
/// the input layer.
pub struct Controller {
    /// Active drawing tool (mutually exclusive selection)
    pub tool: Tool,
    /// Current stroke color
    pub stroke_color: Color,
    /// Current brush/line width in pixels
    pub brush_width: f64,
    /// Whether shape interiors are painted in addition to outlines
    pub fill_enabled: bool,
    /// Current background color; also what the eraser paints with
    pub background_color: Color,
    /// Arrowhead segment length in pixels
    pub arrow_head_length: f64,
    /// Arrowhead angle in degrees
    pub arrow_head_angle: f64,
    /// Gesture state machine
    pub state: GestureState,
    /// Set when the user requested a save; drained by the host
    pending_export: bool,
}

impl Controller {
    /// Creates a controller with explicit initial style state.
    pub fn with_defaults(
        tool: Tool,
        stroke_color: Color,
        brush_width: f64,
        fill_enabled: bool,
        background_color: Color,
        arrow_head_length: f64,
        arrow_head_angle: f64,
    ) -> Self {
        Self {
            tool,
            stroke_color,
            brush_width,
            fill_enabled,
            background_color,
            arrow_head_length,
            arrow_head_angle,
            state: GestureState::Idle,
            pending_export: false,
        }
    }

    /// Creates a controller initialized from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_tool,
            config.drawing.stroke_color.to_color(),
            config.drawing.brush_width,
            config.drawing.fill_enabled,
            config.drawing.background_color.to_color(),
            config.arrow.length,
            config.arrow.angle_degrees,
        )
    }

    /// Processes one input event against the canvas.
    ///
    /// Pointer events drive the gesture state machine; control events mutate
    /// style state or perform session operations. Malformed sequences (e.g. a
    /// pointer move with no active gesture) are no-ops, not errors.
    pub fn handle_event(
        &mut self,
        canvas: &mut Canvas,
        event: InputEvent,
    ) -> Result<(), CanvasError> {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(canvas, x, y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(canvas, x, y),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.end_gesture();
                Ok(())
            }
            InputEvent::Control { change } => self.on_control(canvas, change),
        }
    }

    fn on_control(
        &mut self,
        canvas: &mut Canvas,
        change: ControlChange,
    ) -> Result<(), CanvasError> {
        match change {
            ControlChange::Tool { tool } => self.select_tool(tool),
            ControlChange::BrushWidth { width } => self.set_brush_width(width),
            ControlChange::StrokeColor { color } => self.set_stroke_color(color.to_color()),
            ControlChange::BackgroundColor { color } => {
                return self.set_background_color(canvas, color.to_color());
            }
            ControlChange::FillEnabled { enabled } => self.set_fill_enabled(enabled),
            ControlChange::Clear => return self.clear(canvas),
            ControlChange::Save => {
                log::debug!("Save requested");
                self.pending_export = true;
            }
        }
        Ok(())
    }

    /// Sets the active tool.
    pub fn select_tool(&mut self, tool: Tool) {
        log::debug!("Tool selected: {tool:?}");
        self.tool = tool;
    }

    /// Sets the brush/line width.
    ///
    /// Values are taken verbatim; the size control is expected to enforce its
    /// own bounds. The worst a bad value produces is a visually odd stroke.
    pub fn set_brush_width(&mut self, width: f64) {
        self.brush_width = width;
    }

    /// Sets the stroke color (also used as the fill color when fill is on).
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Toggles whether shape interiors are filled.
    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.fill_enabled = enabled;
    }

    /// Sets the background color and repaints the entire buffer with it.
    ///
    /// Prior strokes are lost. The original behaves this way, and the quirk
    /// is preserved intentionally.
    pub fn set_background_color(
        &mut self,
        canvas: &mut Canvas,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.background_color = color;
        canvas.fill(color)
    }

    /// Wipes the buffer and repaints it with the current background color.
    pub fn clear(&mut self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        log::debug!("Canvas cleared");
        canvas.fill(self.background_color)
    }

    /// Takes and clears the pending save request.
    ///
    /// The host drains this after each event batch and performs the actual
    /// export, which needs filesystem access the controller doesn't have.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    /// Whether a gesture is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// Style applied to shape previews and committed shapes.
    pub(super) fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke: self.stroke_color,
            width: self.brush_width,
            fill: self.fill_enabled.then_some(self.stroke_color),
        }
    }
}
