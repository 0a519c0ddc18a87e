//! Cairo-based rendering functions for shapes and freehand segments.

use super::color::Color;
use super::shape::Shape;
use crate::util;

/// Stroke and fill settings applied when rendering a shape.
#[derive(Clone, Copy, Debug)]
pub struct ShapeStyle {
    /// Outline color
    pub stroke: Color,
    /// Line width in pixels
    pub width: f64,
    /// Interior fill color, or `None` for outline-only shapes
    pub fill: Option<Color>,
}

/// Renders a single shape to a Cairo context.
///
/// Builds the shape path, fills it first when a fill color is set, then
/// strokes the outline on top.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, style: &ShapeStyle) {
    match shape {
        Shape::Rect { x, y, w, h } => {
            ctx.rectangle(*x, *y, *w, *h);
        }
        Shape::Circle { cx, cy, r } => {
            ctx.arc(*cx, *cy, *r, 0.0, 2.0 * std::f64::consts::PI);
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            // Degenerate radii would make the scale matrix singular
            if *rx <= 0.0 || *ry <= 0.0 {
                return;
            }
            ctx.save().ok();
            ctx.translate(*cx, *cy);
            ctx.scale(*rx, *ry);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            ctx.restore().ok();
        }
        Shape::Triangle {
            apex_x,
            apex_y,
            left_x,
            right_x,
            base_y,
        } => {
            ctx.move_to(*apex_x, *apex_y);
            ctx.line_to(*left_x, *base_y);
            ctx.line_to(*right_x, *base_y);
            ctx.close_path();
        }
        Shape::Line { x1, y1, x2, y2 } => {
            ctx.move_to(*x1, *y1);
            ctx.line_to(*x2, *y2);
        }
        Shape::Arrow {
            x1,
            y1,
            x2,
            y2,
            head_length,
            head_angle,
        } => {
            render_arrow(ctx, *x1, *y1, *x2, *y2, style, *head_length, *head_angle);
            return;
        }
    }

    paint_path(ctx, style);
}

/// Renders one freehand stroke segment.
///
/// Freehand drawing commits a short round-capped segment per pointer move,
/// from the previously stroked point to the new one.
pub fn render_segment(ctx: &cairo::Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render an arrow: main line plus two head segments at the tip.
fn render_arrow(
    ctx: &cairo::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    style: &ShapeStyle,
    head_length: f64,
    head_angle: f64,
) {
    let [(lx, ly), (rx, ry)] = util::arrowhead_points(x1, y1, x2, y2, head_length, head_angle);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.line_to(lx, ly);
    ctx.move_to(x2, y2);
    ctx.line_to(rx, ry);

    paint_path(ctx, style);
}

/// Fill (when enabled) then stroke the current path.
fn paint_path(ctx: &cairo::Context, style: &ShapeStyle) {
    if let Some(fill) = style.fill {
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.fill_preserve();
    }

    ctx.set_source_rgba(style.stroke.r, style.stroke.g, style.stroke.b, style.stroke.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    let _ = ctx.stroke();
}
