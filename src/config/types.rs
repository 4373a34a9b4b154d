//! Configuration type definitions.

use super::enums::{ColorSpec, StartTool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool configuration when the sketchpad starts. All of these can
/// be changed at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default ink color - a named color, a hex string like `"#ff8000"`,
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default marker thickness / stamp size in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Glyph placed by the stamp tool (any emoji or character)
    #[serde(default = "default_glyph")]
    pub default_glyph: String,

    /// Tool selected at startup ("marker" or "stamp")
    #[serde(default = "default_tool")]
    pub default_tool: StartTool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_glyph: default_glyph(),
            default_tool: default_tool(),
        }
    }
}

/// On-screen canvas settings.
///
/// The canvas size also defines the scene coordinate space that exports are
/// scaled from.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Color under the marks on screen ("transparent" for none)
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Raster export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Color under the marks in exported images ("transparent" for none)
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Directory exported sketches are saved to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template, chrono format specifiers allowed (".png" is appended)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_glyph() -> String {
    crate::input::tool::DEFAULT_GLYPH.to_string()
}

fn default_tool() -> StartTool {
    StartTool::Marker
}

fn default_canvas_width() -> i32 {
    crate::export::DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> i32 {
    crate::export::DEFAULT_CANVAS_HEIGHT
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_save_directory() -> String {
    "~/Pictures/Scribblepad".to_string()
}

fn default_filename_template() -> String {
    crate::export::file::DEFAULT_FILENAME_TEMPLATE.to_string()
}
