//! Raster export of the finalized sketch.
//!
//! Finalized marks are replayed onto an offscreen Cairo surface scaled by
//! [`EXPORT_SCALE`], encoded as PNG, and optionally written to disk.

pub mod file;
pub mod types;

pub use file::{ExportFileConfig, save_image, save_image_to};
pub use types::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, EXPORT_SCALE, ExportError, ExportOptions,
};

use crate::draw::{Mark, render};
use log::{debug, info};

/// Renders `marks` to PNG bytes at the export resolution.
///
/// Only the given marks are drawn; callers pass the finalized scene, never
/// the in-progress stroke or the hover preview.
pub fn render_png(marks: &[Mark], options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let (width, height) = options.pixel_size();
    debug!(
        "Exporting {} marks to {}x{} (scale {})",
        marks.len(),
        width,
        height,
        options.scale
    );

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        if let Some(background) = options.background {
            render::fill_background(&ctx, background);
        }
        ctx.scale(options.scale, options.scale);
        render::apply_default_style(&ctx);
        render::render_marks(&ctx, marks);
    }

    let mut bytes = Vec::new();
    surface
        .write_to_png(&mut bytes)
        .map_err(|err| ExportError::Encode(err.to_string()))?;

    info!("Exported sketch as {}x{} PNG ({} bytes)", width, height, bytes.len());
    Ok(bytes)
}
