//! Data types for raster export.

use crate::draw::{Color, WHITE};
use thiserror::Error;

/// Fixed upscale factor between the on-screen canvas and the exported image.
pub const EXPORT_SCALE: f64 = 4.0;

/// Default on-screen canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: i32 = 256;
/// Default on-screen canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: i32 = 256;

/// Geometry and background of an exported image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Canvas width in scene units
    pub width: i32,
    /// Canvas height in scene units
    pub height: i32,
    /// Scene-to-pixel factor applied to every mark
    pub scale: f64,
    /// Color painted under the marks (`None` keeps the image transparent)
    pub background: Option<Color>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            scale: EXPORT_SCALE,
            background: Some(WHITE),
        }
    }
}

impl ExportOptions {
    /// Size of the exported raster in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width as f64 * self.scale).round() as i32,
            (self.height as f64 * self.scale).round() as i32,
        )
    }
}

/// Errors that can occur while exporting the sketch.
///
/// Export failures are reported, never fatal: the session keeps working.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Drawing surface is unavailable")]
    SurfaceUnavailable,

    #[error("Failed to create offscreen surface: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),
}
