//! Drawing tool selection and settings.

use crate::draw::{BLACK, Color};

/// Smallest accepted marker thickness / stamp size in pixels.
pub const MIN_THICKNESS: f64 = 1.0;
/// Largest accepted marker thickness / stamp size in pixels.
pub const MAX_THICKNESS: f64 = 50.0;

/// Glyph stamped when no other glyph was chosen.
pub const DEFAULT_GLYPH: &str = "★";

/// Drawing tool selection.
///
/// The active tool decides what a gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    #[default]
    Marker,
    /// Glyph placement - drops the active glyph under the pointer
    Stamp,
}

/// The current tool configuration, owned by the input session.
///
/// Changes apply to the in-progress stroke and the hover preview only;
/// finalized marks keep the style they were created with.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    /// Which tool gestures use
    pub tool: Tool,
    /// Marker line width, or stamp size
    pub thickness: f64,
    /// Ink color for new marks
    pub color: Color,
    /// Glyph used by the stamp tool
    pub glyph: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Marker,
            thickness: 2.0,
            color: BLACK,
            glyph: DEFAULT_GLYPH.to_string(),
        }
    }
}

impl ToolSettings {
    /// Returns `true` when gestures place stamps instead of strokes.
    pub fn placing_stamp(&self) -> bool {
        self.tool == Tool::Stamp
    }
}

/// Clamps a thickness to the accepted range.
///
/// Returns `None` for values that cannot describe a thickness at all
/// (non-finite or not positive).
pub fn sanitize_thickness(value: f64) -> Option<f64> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(value.clamp(MIN_THICKNESS, MAX_THICKNESS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_and_rejects() {
        assert_eq!(sanitize_thickness(0.2), Some(MIN_THICKNESS));
        assert_eq!(sanitize_thickness(7.5), Some(7.5));
        assert_eq!(sanitize_thickness(500.0), Some(MAX_THICKNESS));
        assert_eq!(sanitize_thickness(0.0), None);
        assert_eq!(sanitize_thickness(-3.0), None);
        assert_eq!(sanitize_thickness(f64::NAN), None);
    }
}
