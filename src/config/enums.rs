//! Configuration enum types.

use crate::draw::{Color, color::*};
use crate::input::Tool;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tool active when the sketchpad starts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StartTool {
    /// Freehand marker
    Marker,
    /// Glyph stamp
    Stamp,
}

impl From<StartTool> for Tool {
    fn from(value: StartTool) -> Self {
        match value {
            StartTool::Marker => Tool::Marker,
            StartTool::Stamp => Tool::Stamp,
        }
    }
}

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex color
/// default_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (red, green, blue, yellow, orange, pink, white, black,
    /// transparent) or `#rrggbb` / `#rrggbbaa`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Converts to a [`Color`], falling back to black for unknown names.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_variants() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#ffffff".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color_or(PINK), PINK);
    }
}
