//! Scene history: finalized marks plus the redo buffer.

use super::mark::Mark;

/// Container for every finalized mark of the sketch and the marks that can be redone.
///
/// Marks are kept in draw order (first = bottom, last = top). Undo and redo only
/// ever move whole marks between the tail of `finalized` and the top of `redo`,
/// so older marks are never reordered.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    finalized: Vec<Mark>,
    redo: Vec<Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub const fn new() -> Self {
        Self {
            finalized: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Finalized marks in draw order.
    pub fn marks(&self) -> &[Mark] {
        &self.finalized
    }

    /// Redo buffer, bottom first (the next mark to redo is the last element).
    pub fn redo_marks(&self) -> &[Mark] {
        &self.redo
    }

    pub fn len(&self) -> usize {
        self.finalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.finalized.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Finalizes a mark on top of the scene and discards the redo buffer.
    ///
    /// Returns `false` (and changes nothing) if the mark has no points.
    pub fn commit(&mut self, mark: Mark) -> bool {
        if mark.is_empty() {
            return false;
        }
        self.finalized.push(mark);
        self.redo.clear();
        true
    }

    /// Moves the most recent mark onto the redo buffer.
    pub fn undo(&mut self) -> bool {
        match self.finalized.pop() {
            Some(mark) => {
                self.redo.push(mark);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone mark back onto the scene.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(mark) => {
                self.finalized.push(mark);
                true
            }
            None => false,
        }
    }

    /// Empties both the scene and the redo buffer.
    ///
    /// Returns `false` if there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.finalized.is_empty() && self.redo.is_empty() {
            return false;
        }
        self.finalized.clear();
        self.redo.clear();
        true
    }

    /// Most recent finalized mark, mutable. Used to relocate a stamp in place.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Mark> {
        self.finalized.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Point;
    use crate::draw::color::{BLACK, RED};

    fn stroke(points: &[(f64, f64)]) -> Mark {
        let mut mark = Mark::stroke(2.0, BLACK);
        for &p in points {
            mark.drag(p.into());
        }
        mark
    }

    #[test]
    fn undo_then_redo_restores_sequence() {
        let a = stroke(&[(0.0, 0.0), (5.0, 5.0)]);
        let b = stroke(&[(1.0, 1.0)]);

        let mut scene = Scene::new();
        assert!(scene.commit(a.clone()));
        assert!(scene.commit(b.clone()));

        assert!(scene.undo());
        assert_eq!(scene.marks(), std::slice::from_ref(&a));
        assert_eq!(scene.redo_marks(), std::slice::from_ref(&b));

        assert!(scene.redo());
        assert_eq!(scene.marks(), &[a, b]);
        assert!(scene.redo_marks().is_empty());
    }

    #[test]
    fn commit_after_undo_discards_redo() {
        let mut scene = Scene::new();
        scene.commit(stroke(&[(0.0, 0.0)]));
        scene.commit(stroke(&[(1.0, 1.0)]));
        scene.undo();
        assert!(scene.can_redo());

        scene.commit(Mark::stamp(Point::new(3.0, 3.0), "★", 4.0, RED));
        assert!(!scene.can_redo());
        assert!(!scene.redo());
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn empty_mark_is_not_committed() {
        let mut scene = Scene::new();
        scene.commit(stroke(&[(0.0, 0.0)]));
        scene.undo();

        assert!(!scene.commit(Mark::stroke(2.0, BLACK)));
        assert!(scene.is_empty());
        // A rejected commit does not count as new drawing.
        assert!(scene.can_redo());
    }

    #[test]
    fn undo_and_redo_on_empty_are_noops() {
        let mut scene = Scene::new();
        assert!(!scene.undo());
        assert!(!scene.redo());
        assert!(!scene.clear());
        assert!(scene.is_empty());
    }

    #[test]
    fn undo_is_lifo_over_many_marks() {
        let mut scene = Scene::new();
        for i in 0..5 {
            scene.commit(stroke(&[(i as f64, 0.0)]));
        }
        scene.undo();
        scene.undo();

        let remaining: Vec<f64> = scene.marks().iter().map(|m| m.points()[0].x).collect();
        assert_eq!(remaining, vec![0.0, 1.0, 2.0]);
        let redo: Vec<f64> = scene.redo_marks().iter().map(|m| m.points()[0].x).collect();
        assert_eq!(redo, vec![4.0, 3.0]);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut scene = Scene::new();
        scene.commit(stroke(&[(0.0, 0.0)]));
        scene.commit(stroke(&[(1.0, 0.0)]));
        scene.undo();

        assert!(scene.clear());
        assert!(!scene.can_undo());
        assert!(!scene.can_redo());
    }
}
