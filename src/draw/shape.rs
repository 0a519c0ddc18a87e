//! Shape definitions and drag geometry.

use crate::input::Tool;
use crate::util;

/// Represents a drawable shape primitive.
///
/// Each variant stores the geometry computed from a drag gesture (anchor point
/// to current pointer position). Style (stroke color, width, fill) is applied
/// at render time from the controller's current settings.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle with normalized (non-negative) extent
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width in pixels
        w: f64,
        /// Height in pixels
        h: f64,
    },
    /// Circle centered at the gesture anchor
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in pixels
        r: f64,
    },
    /// Ellipse inscribed in the drag rectangle
    Ellipse {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
    },
    /// Isosceles triangle: apex on the anchor row, base on the current row
    Triangle {
        /// Apex X coordinate (horizontal midpoint of the drag)
        apex_x: f64,
        /// Apex Y coordinate (anchor row)
        apex_y: f64,
        /// Left base corner X (anchor column)
        left_x: f64,
        /// Right base corner X (current column)
        right_x: f64,
        /// Base Y coordinate (current row)
        base_y: f64,
    },
    /// Straight line segment
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
    },
    /// Straight line with a V-shaped head at the end point
    Arrow {
        /// Tail X coordinate (anchor)
        x1: f64,
        /// Tail Y coordinate (anchor)
        y1: f64,
        /// Tip X coordinate
        x2: f64,
        /// Tip Y coordinate
        y2: f64,
        /// Head segment length in pixels
        head_length: f64,
        /// Head angle in degrees off the reversed line direction
        head_angle: f64,
    },
}

impl Shape {
    /// Builds the shape for a drag gesture with the given tool.
    ///
    /// `(ax, ay)` is the anchor captured at gesture start, `(cx, cy)` the
    /// current pointer position. Returns `None` for freehand tools, which
    /// commit segments directly instead of constructing a shape.
    pub fn from_drag(
        tool: Tool,
        ax: f64,
        ay: f64,
        cx: f64,
        cy: f64,
        head_length: f64,
        head_angle: f64,
    ) -> Option<Self> {
        match tool {
            Tool::Brush | Tool::Eraser => None,
            Tool::Rectangle => {
                let (x, y, w, h) = util::normalized_rect(ax, ay, cx, cy);
                Some(Shape::Rect { x, y, w, h })
            }
            Tool::Circle => Some(Shape::Circle {
                cx: ax,
                cy: ay,
                r: util::distance(ax, ay, cx, cy),
            }),
            Tool::Ellipse => {
                let (ecx, ecy, rx, ry) = util::ellipse_bounds(ax, ay, cx, cy);
                Some(Shape::Ellipse {
                    cx: ecx,
                    cy: ecy,
                    rx,
                    ry,
                })
            }
            Tool::Triangle => Some(Shape::Triangle {
                apex_x: (ax + cx) / 2.0,
                apex_y: ay,
                left_x: ax,
                right_x: cx,
                base_y: cy,
            }),
            Tool::Line => Some(Shape::Line {
                x1: ax,
                y1: ay,
                x2: cx,
                y2: cy,
            }),
            Tool::Arrow => Some(Shape::Arrow {
                x1: ax,
                y1: ay,
                x2: cx,
                y2: cy,
                head_length,
                head_angle,
            }),
        }
    }
}
