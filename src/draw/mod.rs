//! Sketch model and Cairo rendering.
//!
//! This module defines the core drawing types of the sketchpad:
//! - [`Color`]: RGBA color representation with a named palette
//! - [`Mark`]: a stroke or a stamped glyph, the atomic undoable unit
//! - [`Scene`]: finalized marks plus the redo buffer
//! - [`DrawingSurface`]: the on-screen surface redrawn on every change
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod mark;
pub mod render;
pub mod scene;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use color::Color;
pub use mark::{Mark, MarkKind, Point};
pub use render::{render_mark, render_marks, render_stroke_borrowed};
pub use scene::Scene;
pub use surface::DrawingSurface;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
