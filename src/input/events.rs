//! Change notifications emitted by the input session.

use super::state::InputState;

/// What a mutating operation changed.
///
/// Exactly one event is emitted per operation that changed something, after
/// the mutation completed. Operations that change nothing emit none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A stroke was opened or a stamp was placed by a new gesture
    GestureStarted,
    /// A sample was appended to the open stroke
    StrokeExtended,
    /// A stamping gesture finalized another stamp
    StampPlaced,
    /// A stamping gesture moved its stamp in place
    StampMoved,
    /// The active gesture ended and its mark was finalized
    GestureEnded,
    /// The pointer left the surface (ends any gesture, hides the preview)
    PointerLeft,
    /// The hover preview moved
    HoverMoved,
    /// Thickness, color, glyph or tool changed
    ToolChanged,
    /// The most recent mark moved to the redo buffer
    Undo,
    /// The most recently undone mark came back
    Redo,
    /// All marks and the redo buffer were discarded
    Cleared,
}

/// Listener invoked synchronously after every change.
///
/// Listeners get a shared borrow of the session: they can read the scene
/// (to redraw it, or to enable undo/redo buttons) but cannot mutate it.
pub type ChangeListener = Box<dyn FnMut(&ChangeEvent, &InputState)>;
