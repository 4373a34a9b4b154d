//! Drawing state machine and input session state.

use crate::draw::{Color, Mark, Point, Scene};
use crate::export::{self, ExportError, ExportOptions};
use crate::input::events::{ChangeEvent, ChangeListener};
use crate::input::tool::{self, Tool, ToolSettings};
use log::{debug, info, warn};
use std::fmt;

/// Current gesture state machine.
///
/// Tracks whether the user is idle, dragging out a stroke, or placing stamps.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No gesture in progress - hover preview is shown
    Idle,
    /// Pointer held down with the marker tool
    Dragging {
        /// Stroke being recorded; finalized on release
        mark: Mark,
    },
    /// Pointer held down with the stamp tool (stamps finalize eagerly)
    Stamping {
        /// Whether the newest finalized mark is the stamp this gesture placed
        placed: bool,
    },
}

/// The input session: scene history, tool settings, gesture state and listeners.
///
/// All operations are synchronous. Each one that changes anything fires exactly
/// one [`ChangeEvent`] to every registered listener after the change is complete.
pub struct InputState {
    /// Finalized marks and redo buffer
    pub(crate) scene: Scene,
    /// Current gesture state
    pub(crate) state: DrawingState,
    /// Active tool configuration
    pub(crate) tool: ToolSettings,
    /// Last pointer position over the surface while idle
    pub(crate) hover: Option<Point>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputState")
            .field("scene", &self.scene)
            .field("state", &self.state)
            .field("tool", &self.tool)
            .field("hover", &self.hover)
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(ToolSettings::default())
    }
}

impl InputState {
    /// Creates an idle session with an empty scene.
    pub fn new(tool: ToolSettings) -> Self {
        Self {
            scene: Scene::new(),
            state: DrawingState::Idle,
            tool,
            hover: None,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener invoked after every mutating operation.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent, &InputState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Invokes every listener with `event` and a shared view of the session.
    pub(super) fn notify(&mut self, event: ChangeEvent) {
        debug!("Change: {:?}", event);
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(&event, self);
        }
        self.listeners = listeners;
    }

    /// Finalized marks and redo buffer.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current gesture state.
    pub fn drawing_state(&self) -> &DrawingState {
        &self.state
    }

    /// Active tool configuration.
    pub fn tool(&self) -> &ToolSettings {
        &self.tool
    }

    /// Pointer position used for the hover preview.
    pub fn hover_position(&self) -> Option<Point> {
        self.hover
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DrawingState::Idle)
    }

    /// The stroke being recorded, if the marker is dragging.
    pub fn open_mark(&self) -> Option<&Mark> {
        match &self.state {
            DrawingState::Dragging { mark } => Some(mark),
            _ => None,
        }
    }

    /// Sets the marker thickness / stamp size.
    ///
    /// The value is clamped to `MIN_THICKNESS..=MAX_THICKNESS`; values that are
    /// not finite and positive are ignored. An open stroke takes the new width.
    pub fn set_thickness(&mut self, value: f64) {
        let Some(thickness) = tool::sanitize_thickness(value) else {
            warn!("Ignoring invalid thickness {value}");
            return;
        };
        if thickness == self.tool.thickness {
            return;
        }

        self.tool.thickness = thickness;
        if let DrawingState::Dragging { mark } = &mut self.state {
            mark.thickness = thickness;
        }
        debug!("Thickness set to {:.1}px", thickness);
        self.notify(ChangeEvent::ToolChanged);
    }

    /// Adjusts the thickness by a delta (e.g. one scroll step).
    pub fn adjust_thickness(&mut self, delta: f64) {
        if !delta.is_finite() {
            warn!("Ignoring invalid thickness delta {delta}");
            return;
        }
        let target = (self.tool.thickness + delta).max(tool::MIN_THICKNESS);
        self.set_thickness(target);
    }

    /// Sets the ink color for new marks and the open stroke.
    pub fn set_color(&mut self, color: Color) {
        if color == self.tool.color {
            return;
        }

        self.tool.color = color;
        if let DrawingState::Dragging { mark } = &mut self.state {
            mark.color = color;
        }
        self.notify(ChangeEvent::ToolChanged);
    }

    /// Sets the glyph placed by the stamp tool. Empty glyphs are ignored.
    pub fn set_glyph(&mut self, glyph: &str) {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            warn!("Ignoring empty stamp glyph");
            return;
        }
        if glyph == self.tool.glyph {
            return;
        }

        self.tool.glyph = glyph.to_string();
        self.notify(ChangeEvent::ToolChanged);
    }

    /// Switches between stamping and freehand drawing for the next gesture.
    pub fn set_placing_stamp(&mut self, placing: bool) {
        let tool = if placing { Tool::Stamp } else { Tool::Marker };
        if tool == self.tool.tool {
            return;
        }

        self.tool.tool = tool;
        debug!("Tool switched to {:?}", tool);
        self.notify(ChangeEvent::ToolChanged);
    }

    /// Moves the most recent mark to the redo buffer. No-op on an empty scene.
    pub fn undo(&mut self) {
        if self.scene.undo() {
            self.release_placed_stamp();
            self.notify(ChangeEvent::Undo);
        }
    }

    /// Restores the most recently undone mark. No-op on an empty redo buffer.
    pub fn redo(&mut self) {
        if self.scene.redo() {
            self.release_placed_stamp();
            self.notify(ChangeEvent::Redo);
        }
    }

    /// Discards every finalized mark and the redo buffer.
    ///
    /// Always notifies, so listeners repaint even when the scene was already empty.
    pub fn clear(&mut self) {
        if self.scene.clear() {
            info!("Sketch cleared");
            self.release_placed_stamp();
        }
        self.notify(ChangeEvent::Cleared);
    }

    /// Stops the current stamping gesture from relocating the scene tail.
    fn release_placed_stamp(&mut self) {
        if let DrawingState::Stamping { placed } = &mut self.state {
            *placed = false;
        }
    }

    /// Renders the finalized marks to PNG bytes.
    ///
    /// The in-progress stroke and the hover preview are never exported.
    pub fn export_image(&self, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        export::render_png(self.scene.marks(), options)
    }
}
