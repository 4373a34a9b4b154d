//! Freehand sketchpad engine.
//!
//! Pointer gestures become strokes or stamped glyphs ([`draw::Mark`]) kept in an
//! undoable [`draw::Scene`]. The [`input::InputState`] session drives the
//! gesture state machine and notifies listeners after every change so the
//! scene can be redrawn onto a Cairo surface, and [`export`] renders the
//! finalized sketch to an upscaled PNG.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use draw::{DrawingSurface, Mark, Point, Scene};
pub use input::{ChangeEvent, InputState};
