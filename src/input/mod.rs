//! Input handling and tool state machine.
//!
//! This module turns pointer gestures and tool changes into mutations of the
//! sketch. It owns the current tool settings, the drawing state machine
//! (idle, dragging, stamping), and the change listeners that redraw the scene.

pub mod events;
pub mod state;
pub mod tool;

pub use events::{ChangeEvent, ChangeListener};
pub use state::{DrawingState, InputState};
pub use tool::{Tool, ToolSettings};
