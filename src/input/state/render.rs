use crate::draw::render::{render_marker_preview, render_stamp_preview, render_stroke_borrowed};
use crate::input::tool::Tool;

use super::{DrawingState, InputState};

impl InputState {
    /// Renders the open stroke directly to a Cairo context without cloning it.
    ///
    /// # Returns
    /// `true` if a stroke was rendered, `false` when no stroke is being dragged
    pub fn render_provisional_mark(&self, ctx: &cairo::Context) -> bool {
        if let DrawingState::Dragging { mark } = &self.state {
            render_stroke_borrowed(ctx, mark.points(), mark.color, mark.thickness);
            true
        } else {
            false
        }
    }

    /// Renders the active tool's indicator at the hover position.
    ///
    /// Nothing is drawn during a gesture or when the pointer is not over the surface.
    pub fn render_hover_preview(&self, ctx: &cairo::Context) -> bool {
        if self.is_active() {
            return false;
        }
        let Some(at) = self.hover else {
            return false;
        };

        match self.tool.tool {
            Tool::Marker => {
                render_marker_preview(ctx, at, self.tool.color, self.tool.thickness);
            }
            Tool::Stamp => {
                render_stamp_preview(
                    ctx,
                    at,
                    &self.tool.glyph,
                    self.tool.thickness,
                    self.tool.color,
                );
            }
        }
        true
    }
}
