//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what the pointer paints while dragging.
/// Exactly one tool is active at a time; it is read on every pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand drawing in the stroke color (default)
    Brush,
    /// Freehand drawing in the background color
    Eraser,
    /// Axis-aligned rectangle from corner to corner
    Rectangle,
    /// Circle centered on the anchor point
    Circle,
    /// Ellipse inscribed in the drag rectangle
    Ellipse,
    /// Isosceles triangle, apex on the anchor row
    Triangle,
    /// Straight line between anchor and pointer
    Line,
    /// Straight line with an arrowhead at the pointer end
    Arrow,
}

impl Tool {
    /// Whether this tool commits pixels cumulatively on every pointer move
    /// (as opposed to shape tools, which redraw a live preview each move).
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}
