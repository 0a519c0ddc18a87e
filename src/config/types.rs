//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the initial tool and style state when a session starts. Users
/// change these at runtime through the UI controls.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool selected at session start
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Initial stroke color - a named color, `#rrggbb` hex string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Initial brush width in pixels (valid range: 1.0 - 30.0)
    #[serde(default = "default_brush_width")]
    pub brush_width: f64,

    /// Whether shape interiors start out filled
    #[serde(default = "default_fill_enabled")]
    pub fill_enabled: bool,

    /// Initial canvas background color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            stroke_color: default_stroke_color(),
            brush_width: default_brush_width(),
            fill_enabled: default_fill_enabled(),
            background_color: default_background_color(),
        }
    }
}

/// Arrow drawing settings.
///
/// Controls the appearance of arrowheads when using the arrow tool.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Canvas dimensions.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Export settings for saved images.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory saved images are written to (supports `~` expansion)
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// Filename prefix; files are named `<prefix>-<unix-epoch-millis>.<format>`
    #[serde(default = "default_export_prefix")]
    pub prefix: String,

    /// Image format extension
    #[serde(default = "default_export_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            prefix: default_export_prefix(),
            format: default_export_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::Brush
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_width() -> f64 {
    5.0
}

fn default_fill_enabled() -> bool {
    false
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_arrow_length() -> f64 {
    15.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    600
}

fn default_export_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Sketchify")
}

fn default_export_prefix() -> String {
    "sketchify".to_string()
}

fn default_export_format() -> String {
    "png".to_string()
}
