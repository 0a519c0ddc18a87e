//! Geometry helpers and color name mapping.

use crate::draw::{color::*, Color};

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two arrowhead barb points for an arrow.
///
/// The arrow runs from `(x1, y1)` (tail/anchor) to `(x2, y2)` (tip). The head
/// is a V at the tip: two segments of `length` pixels departing the tip at
/// `angle_degrees` either side of the reversed line direction.
///
/// # Returns
/// Array of two points `[(left_x, left_y), (right_x, right_y)]`. If the line
/// is shorter than one pixel there is no meaningful direction and both points
/// equal the tip, so the head degenerates along with the line.
pub fn arrowhead_points(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let line_length = (dx * dx + dy * dy).sqrt();

    if line_length < 1.0 {
        return [(x2, y2), (x2, y2)];
    }

    // Unit vector pointing from tail to tip
    let ux = dx / line_length;
    let uy = dy / line_length;

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    // Rotate the reversed direction by ±angle and walk `length` pixels back
    let left_x = x2 - length * (ux * cos_a - uy * sin_a);
    let left_y = y2 - length * (uy * cos_a + ux * sin_a);

    let right_x = x2 - length * (ux * cos_a + uy * sin_a);
    let right_y = y2 - length * (uy * cos_a - ux * sin_a);

    [(left_x, left_y), (right_x, right_y)]
}

// ============================================================================
// Drag Geometry
// ============================================================================

/// Calculates ellipse parameters from two corner points of a drag.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)`: center point and horizontal/vertical radii.
pub fn ellipse_bounds(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64, f64, f64) {
    let cx = (x1 + x2) / 2.0;
    let cy = (y1 + y2) / 2.0;
    let rx = (x2 - x1).abs() / 2.0;
    let ry = (y2 - y1).abs() / 2.0;
    (cx, cy, rx, ry)
}

/// Normalizes a drag rectangle so width and height are non-negative.
///
/// # Returns
/// Tuple `(x, y, w, h)` with `(x, y)` at the top-left corner.
pub fn normalized_rect(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64, f64, f64) {
    let (x, w) = if x2 >= x1 { (x1, x2 - x1) } else { (x2, x1 - x2) };
    let (y, h) = if y2 >= y1 { (y1, y2 - y1) } else { (y2, y1 - y2) };
    (x, y, w, h)
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and trace files to parse named colors.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}
