use crate::draw::{Mark, Point};
use crate::input::{events::ChangeEvent, tool::Tool};
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Starts a gesture at `point` (pointer pressed).
    ///
    /// # Behavior
    /// - Marker tool: opens a stroke whose first sample is `point`
    /// - Stamp tool: finalizes a stamp of the active glyph at `point`
    /// - If a gesture is somehow still open (a release was never delivered),
    ///   it is finalized first, within the same notification
    pub fn begin_gesture(&mut self, point: Point) {
        if self.is_active() {
            debug!("Gesture started while another was open; finalizing it");
            self.finish_gesture();
        }

        match self.tool.tool {
            Tool::Marker => {
                let mut mark = Mark::stroke(self.tool.thickness, self.tool.color);
                mark.drag(point);
                self.state = DrawingState::Dragging { mark };
            }
            Tool::Stamp => {
                self.scene.commit(Mark::stamp(
                    point,
                    self.tool.glyph.clone(),
                    self.tool.thickness,
                    self.tool.color,
                ));
                self.state = DrawingState::Stamping { placed: true };
            }
        }

        self.hover = Some(point);
        self.notify(ChangeEvent::GestureStarted);
    }

    /// Feeds a pointer sample while the pointer is held down.
    ///
    /// # Behavior
    /// - Dragging: appends `point` to the open stroke
    /// - Stamping: moves the stamp this gesture placed to `point` if it is still
    ///   the newest mark and matches the active glyph and thickness, otherwise
    ///   finalizes a new stamp there
    /// - Idle: ignored
    pub fn extend_gesture(&mut self, point: Point) {
        let event = if let DrawingState::Dragging { mark } = &mut self.state {
            mark.drag(point);
            ChangeEvent::StrokeExtended
        } else if let DrawingState::Stamping { placed } = self.state {
            self.place_stamp(point, placed)
        } else {
            return;
        };

        self.hover = Some(point);
        self.notify(event);
    }

    /// Ends the gesture (pointer released). Ignored while idle.
    ///
    /// An open stroke is finalized, even when it only holds a single sample;
    /// finalizing discards the redo buffer.
    pub fn end_gesture(&mut self) {
        if self.finish_gesture() {
            self.notify(ChangeEvent::GestureEnded);
        }
    }

    /// Handles the pointer leaving the surface.
    ///
    /// Any gesture is finalized exactly like a release and the hover preview
    /// is hidden.
    pub fn pointer_left(&mut self) {
        let ended = self.finish_gesture();
        let had_hover = self.hover.take().is_some();
        if ended || had_hover {
            self.notify(ChangeEvent::PointerLeft);
        }
    }

    /// Updates the hover preview position.
    ///
    /// The position is always tracked, but only notifies while idle since the
    /// preview is hidden during a gesture.
    pub fn set_hover_position(&mut self, point: Point) {
        if self.hover == Some(point) {
            return;
        }
        self.hover = Some(point);
        if !self.is_active() {
            self.notify(ChangeEvent::HoverMoved);
        }
    }

    /// Moves the session back to idle, committing the open stroke.
    ///
    /// Returns `false` if no gesture was active.
    fn finish_gesture(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => false,
            DrawingState::Dragging { mark } => {
                debug!("Finalizing stroke with {} points", mark.len());
                self.scene.commit(mark);
                true
            }
            DrawingState::Stamping { .. } => true,
        }
    }

    /// `placed` is set while the newest finalized mark is this gesture's stamp.
    fn place_stamp(&mut self, point: Point, placed: bool) -> ChangeEvent {
        let glyph = &self.tool.glyph;
        let thickness = self.tool.thickness;

        if placed
            && let Some(last) = self.scene.last_mut()
            && last.is_stamp_of(glyph, thickness)
        {
            last.relocate(point);
            return ChangeEvent::StampMoved;
        }

        self.scene.commit(Mark::stamp(
            point,
            glyph.clone(),
            thickness,
            self.tool.color,
        ));
        self.state = DrawingState::Stamping { placed: true };
        ChangeEvent::StampPlaced
    }
}
