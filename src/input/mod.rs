//! Input handling and the drawing controller.
//!
//! This module translates host pointer and control events into canvas
//! operations. It maintains the current tool and style state and runs the
//! Idle/Drawing gesture state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{ControlChange, InputEvent};
pub use state::{Controller, GestureState};
pub use tool::Tool;
