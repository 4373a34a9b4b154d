//! On-screen drawing surface redrawn from the session on every change.

use super::color::Color;
use super::render;
use crate::export::ExportError;
use crate::input::InputState;
use log::{debug, warn};
use std::io::Write;

/// The visible drawing surface.
///
/// Holds a Cairo image surface sized to the canvas. If the surface could not be
/// created it is *unavailable*: every redraw becomes a silent no-op, and the
/// session keeps accepting gestures.
pub struct DrawingSurface {
    surface: Option<cairo::ImageSurface>,
    width: i32,
    height: i32,
    background: Option<Color>,
}

impl DrawingSurface {
    /// Creates a transparent ARGB32 surface of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let surface = match cairo::ImageSurface::create(cairo::Format::ARgb32, width, height) {
            Ok(surface) => Some(surface),
            Err(err) => {
                warn!("Drawing surface {width}x{height} unavailable: {err}");
                None
            }
        };

        Self {
            surface,
            width,
            height,
            background: None,
        }
    }

    /// Creates a surface that was never obtained. All drawing is skipped.
    pub fn unavailable(width: i32, height: i32) -> Self {
        Self {
            surface: None,
            width,
            height,
            background: None,
        }
    }

    /// Sets the color painted under the marks on every redraw (`None` = transparent).
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Underlying Cairo surface, if available.
    pub fn image(&self) -> Option<&cairo::ImageSurface> {
        self.surface.as_ref()
    }

    /// Redraws the whole scene from the session state.
    ///
    /// Order: clear, background, default style, finalized marks, the
    /// in-progress stroke, then the hover preview when no gesture is active.
    pub fn redraw(&mut self, state: &InputState) {
        let Some(surface) = &self.surface else {
            debug!("Skipping redraw: drawing surface unavailable");
            return;
        };
        let ctx = match cairo::Context::new(surface) {
            Ok(ctx) => ctx,
            Err(err) => {
                debug!("Skipping redraw: {err}");
                return;
            }
        };

        render::clear(&ctx);
        if let Some(background) = self.background {
            render::fill_background(&ctx, background);
        }
        render::apply_default_style(&ctx);

        let marks = state.scene().marks();
        debug!("Rendering {} finalized marks", marks.len());
        render::render_marks(&ctx, marks);

        if state.render_provisional_mark(&ctx) {
            debug!("Rendered in-progress stroke");
        }
        state.render_hover_preview(&ctx);
    }

    /// Encodes the current surface contents as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        let surface = self.surface.as_ref().ok_or(ExportError::SurfaceUnavailable)?;
        surface.flush();
        surface
            .write_to_png(writer)
            .map_err(|err| ExportError::Encode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Point;
    use crate::draw::color::WHITE;
    use crate::draw::test_support::pixel_alpha;
    use crate::input::ToolSettings;

    fn session() -> InputState {
        InputState::new(ToolSettings::default())
    }

    #[test]
    fn redraw_shows_in_progress_stroke() {
        let mut surface = DrawingSurface::new(40, 40);
        let mut state = session();
        state.set_thickness(6.0);
        state.begin_gesture(Point::new(5.0, 20.0));
        state.extend_gesture(Point::new(35.0, 20.0));

        surface.redraw(&state);
        let mut image = surface.surface.take().unwrap();
        assert_eq!(pixel_alpha(&mut image, 20, 20), 255);
    }

    #[test]
    fn redraw_clears_undone_marks() {
        let mut surface = DrawingSurface::new(40, 40);
        let mut state = session();
        state.set_thickness(10.0);
        state.begin_gesture(Point::new(20.0, 20.0));
        state.end_gesture();
        surface.redraw(&state);

        state.undo();
        surface.redraw(&state);

        let mut image = surface.surface.take().unwrap();
        assert_eq!(pixel_alpha(&mut image, 20, 20), 0);
    }

    #[test]
    fn background_is_painted_under_marks() {
        let mut surface = DrawingSurface::new(10, 10).with_background(Some(WHITE));
        surface.redraw(&session());

        let mut image = surface.surface.take().unwrap();
        assert_eq!(pixel_alpha(&mut image, 0, 0), 255);
    }

    #[test]
    fn unavailable_surface_is_a_silent_noop() {
        let mut surface = DrawingSurface::unavailable(40, 40);
        let mut state = session();
        state.begin_gesture(Point::new(1.0, 1.0));
        surface.redraw(&state);

        assert!(!surface.is_available());
        let mut sink = Vec::new();
        assert!(matches!(
            surface.write_png(&mut sink),
            Err(ExportError::SurfaceUnavailable)
        ));
    }

    #[test]
    fn invalid_size_yields_unavailable_surface() {
        let surface = DrawingSurface::new(-1, 10);
        assert!(!surface.is_available());
    }
}
