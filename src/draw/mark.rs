//! Mark definitions: the atomic undoable units of a sketch.

use super::color::Color;

/// A position on the drawing surface, relative to its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point multiplied by `factor` on both axes.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Variant-specific payload of a [`Mark`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkKind {
    /// Freehand polyline traced by a drag gesture
    Stroke {
        /// Pointer samples in the order they were recorded
        points: Vec<Point>,
    },
    /// Glyph stamped at a single anchor
    Stamp {
        /// Center of the glyph
        anchor: Point,
        /// Symbol to draw (usually a single emoji or character)
        glyph: String,
    },
}

/// A single visual unit on the sketch: a stroke or a stamp.
///
/// Style fields are shared by both variants, so every mark renders with its
/// own thickness and color regardless of the tool settings at render time.
/// For stamps, `thickness` doubles as the glyph size.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Line width for strokes, size unit for stamps (always positive)
    pub thickness: f64,
    /// Ink color
    pub color: Color,
    /// Stroke or stamp payload
    pub kind: MarkKind,
}

impl Mark {
    /// Creates an empty stroke. Points are appended while the gesture runs.
    pub fn stroke(thickness: f64, color: Color) -> Self {
        Self {
            thickness,
            color,
            kind: MarkKind::Stroke { points: Vec::new() },
        }
    }

    /// Creates a stamp anchored at `anchor`.
    pub fn stamp(anchor: Point, glyph: impl Into<String>, thickness: f64, color: Color) -> Self {
        Self {
            thickness,
            color,
            kind: MarkKind::Stamp {
                anchor,
                glyph: glyph.into(),
            },
        }
    }

    /// Returns the recorded points: the polyline for a stroke, the anchor for a stamp.
    pub fn points(&self) -> &[Point] {
        match &self.kind {
            MarkKind::Stroke { points } => points,
            MarkKind::Stamp { anchor, .. } => std::slice::from_ref(anchor),
        }
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns `true` for a stroke that has not recorded any sample yet.
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Appends a sample to a stroke. Stamps ignore it.
    pub fn drag(&mut self, point: Point) {
        if let MarkKind::Stroke { points } = &mut self.kind {
            points.push(point);
        }
    }

    /// Moves a stamp's anchor. Strokes ignore it.
    pub fn relocate(&mut self, point: Point) {
        if let MarkKind::Stamp { anchor, .. } = &mut self.kind {
            *anchor = point;
        }
    }

    /// Returns `true` for a stroke that renders as a dot.
    pub fn is_dot(&self) -> bool {
        matches!(&self.kind, MarkKind::Stroke { points } if points.len() == 1)
    }

    /// Returns `true` if this is a stamp of `glyph` at exactly `thickness`.
    pub fn is_stamp_of(&self, glyph: &str, thickness: f64) -> bool {
        matches!(&self.kind, MarkKind::Stamp { glyph: g, .. } if g == glyph)
            && self.thickness == thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn stroke_collects_points_in_order() {
        let mut mark = Mark::stroke(2.0, BLACK);
        assert!(mark.is_empty());

        mark.drag(Point::new(0.0, 0.0));
        assert!(mark.is_dot());

        mark.drag(Point::new(5.0, 5.0));
        assert!(!mark.is_dot());
        assert_eq!(
            mark.points(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]
        );
    }

    #[test]
    fn stamp_always_has_one_point() {
        let mut mark = Mark::stamp(Point::new(10.0, 10.0), "★", 4.0, RED);
        mark.drag(Point::new(1.0, 1.0));
        assert_eq!(mark.len(), 1);

        mark.relocate(Point::new(20.0, 20.0));
        assert_eq!(mark.points(), &[Point::new(20.0, 20.0)]);
        assert!(!mark.is_dot());
    }

    #[test]
    fn stamp_matching_checks_glyph_and_thickness() {
        let mark = Mark::stamp(Point::default(), "★", 4.0, RED);
        assert!(mark.is_stamp_of("★", 4.0));
        assert!(!mark.is_stamp_of("★", 5.0));
        assert!(!mark.is_stamp_of("🌵", 4.0));
        assert!(!Mark::stroke(4.0, RED).is_stamp_of("★", 4.0));
    }
}
