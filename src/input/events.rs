//! Input event types consumed by the drawing controller.
//!
//! Pointer events come from whatever surface hosts the canvas; control
//! events come from UI widgets (tool buttons, sliders, color pickers).
//! Serde support exists so event traces can be recorded and replayed
//! headlessly from JSON.

use super::tool::Tool;
use crate::config::ColorSpec;
use serde::{Deserialize, Serialize};

/// A single input event delivered to [`Controller::handle_event`].
///
/// Events are processed strictly in arrival order; handlers run to
/// completion, so there is no overlapping gesture processing.
///
/// [`Controller::handle_event`]: crate::input::Controller::handle_event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed inside the canvas; starts a gesture
    PointerDown { x: f64, y: f64 },
    /// Pointer moved; extends the active gesture, no-op when idle
    PointerMove { x: f64, y: f64 },
    /// Pointer released; ends the active gesture
    PointerUp,
    /// Pointer left the drawable region; ends the active gesture
    PointerLeave,
    /// A UI control changed value
    Control {
        #[serde(flatten)]
        change: ControlChange,
    },
}

/// A change coming from one of the session's UI controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlChange {
    /// Tool button clicked (mutually exclusive selection)
    Tool { tool: Tool },
    /// Size slider moved
    BrushWidth { width: f64 },
    /// Stroke color picker changed
    StrokeColor { color: ColorSpec },
    /// Background color applied; repaints the whole buffer
    BackgroundColor { color: ColorSpec },
    /// Fill checkbox toggled
    FillEnabled { enabled: bool },
    /// Clear button clicked
    Clear,
    /// Save button clicked
    Save,
}
