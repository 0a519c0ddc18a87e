//! Sketchify: a freehand and shape drawing engine over a raster canvas.
//!
//! Exposes the drawing controller, canvas, and configuration types so hosts
//! (the bundled trace-replay CLI, or an embedding UI) can drive the gesture
//! state machine with explicit input events and export the result as PNG.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
