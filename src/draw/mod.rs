//! Rendering primitives and the raster canvas (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: drag-defined shape primitives (rectangle, circle, ellipse, ...)
//! - [`Canvas`]: the persistent raster buffer with snapshot/restore support
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{render_segment, render_shape, ShapeStyle};
pub use shape::Shape;
pub use surface::{Canvas, CanvasError, Snapshot};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
