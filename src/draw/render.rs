//! Cairo-based rendering functions for marks and tool previews.

use super::color::{BLACK, Color};
use super::mark::{Mark, MarkKind, Point};
use std::f64::consts::PI;

/// Stroke width applied before any mark is drawn.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Glyph size in pixels per unit of stamp thickness.
pub const GLYPH_SCALE: f64 = 8.0;

/// Font family used to shape stamp glyphs (fontconfig falls back to emoji fonts).
const GLYPH_FONT_FAMILY: &str = "Sans";

/// Sets the default stroke style (width, cap, color) once per redraw.
///
/// Every mark overrides these with its own thickness and color; the defaults
/// only matter for anything drawn without explicit style.
pub fn apply_default_style(ctx: &cairo::Context) {
    ctx.set_line_width(DEFAULT_LINE_WIDTH);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    BLACK.apply(ctx);
}

/// Renders all marks in draw order (first mark = bottom layer).
pub fn render_marks(ctx: &cairo::Context, marks: &[Mark]) {
    for mark in marks {
        render_mark(ctx, mark);
    }
}

/// Renders a single mark using its own style.
pub fn render_mark(ctx: &cairo::Context, mark: &Mark) {
    match &mark.kind {
        MarkKind::Stroke { points } => {
            render_stroke_borrowed(ctx, points, mark.color, mark.thickness);
        }
        MarkKind::Stamp { anchor, glyph } => {
            render_stamp(ctx, *anchor, glyph, mark.thickness, mark.color);
        }
    }
}

/// Render a freehand stroke (polyline through points).
///
/// Takes a borrowed slice so the in-progress stroke can be drawn on every
/// pointer sample without cloning it. A single-point stroke becomes a filled
/// dot of radius `thick / 2` instead of a zero-length line.
pub fn render_stroke_borrowed(ctx: &cairo::Context, points: &[Point], color: Color, thick: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    color.apply(ctx);

    if rest.is_empty() {
        ctx.new_path();
        ctx.arc(first.x, first.y, thick / 2.0, 0.0, 2.0 * PI);
        let _ = ctx.fill();
        return;
    }

    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Renders a glyph centered on `anchor`.
///
/// The glyph is laid out with Pango at `size * GLYPH_SCALE` pixels.
pub fn render_stamp(ctx: &cairo::Context, anchor: Point, glyph: &str, size: f64, color: Color) {
    if glyph.is_empty() {
        return;
    }

    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(GLYPH_FONT_FAMILY);
    font_desc.set_absolute_size(glyph_pixel_size(size) * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(glyph);

    let (width, height) = layout.pixel_size();
    ctx.move_to(anchor.x - width as f64 / 2.0, anchor.y - height as f64 / 2.0);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Draws the marker hover indicator: an outline the size of the brush tip.
pub fn render_marker_preview(ctx: &cairo::Context, at: Point, color: Color, thick: f64) {
    ctx.save().ok();
    ctx.new_path();
    color.with_alpha(color.a * 0.6).apply(ctx);
    ctx.set_line_width(1.0);
    ctx.arc(at.x, at.y, (thick / 2.0).max(1.0), 0.0, 2.0 * PI);
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Draws the stamp hover indicator: a translucent copy of the glyph.
pub fn render_stamp_preview(ctx: &cairo::Context, at: Point, glyph: &str, size: f64, color: Color) {
    render_stamp(ctx, at, glyph, size, color.with_alpha(color.a * 0.5));
}

/// Pixel size of a stamp glyph for the given thickness.
pub fn glyph_pixel_size(thickness: f64) -> f64 {
    thickness * GLYPH_SCALE
}

/// Fills the whole target with `color`, replacing whatever was there.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Clears the whole target to fully transparent pixels.
pub fn clear(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}
