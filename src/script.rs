//! Line-oriented gesture scripts.
//!
//! A script stands in for the toolbar and pointer wiring of an interactive
//! host: each line calls one public operation of the [`InputState`].
//!
//! ```text
//! # draw a line, then stamp a cactus
//! down 10 10
//! move 50 50
//! up
//! stamp on
//! glyph 🌵
//! down 80 80
//! up
//! export sketch.png
//! ```

use crate::draw::{Color, Point};
use crate::input::InputState;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A single script instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `down X Y` - press the pointer
    Down(Point),
    /// `move X Y` - move the pointer (extends the gesture or moves the hover preview)
    Move(Point),
    /// `up` - release the pointer
    Up,
    /// `leave` - pointer leaves the surface
    Leave,
    /// `hover X Y` - move the pointer without pressing
    Hover(Point),
    /// `thickness T`
    Thickness(f64),
    /// `color NAME|#RRGGBB`
    Color(Color),
    /// `glyph SYMBOL`
    Glyph(String),
    /// `stamp on|off`
    PlacingStamp(bool),
    Undo,
    Redo,
    Clear,
    /// `export [PATH]` - export the finalized sketch
    Export(Option<PathBuf>),
}

/// What the host should do after a command was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Continue,
    /// Export the finalized sketch, to the given path or the configured directory
    Export(Option<PathBuf>),
}

/// Errors raised while parsing a script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    InvalidArgument { line: usize, message: String },
}

impl Command {
    /// Applies the command to the session.
    pub fn apply(&self, state: &mut InputState) -> Step {
        match self {
            Command::Down(point) => state.begin_gesture(*point),
            Command::Move(point) => {
                if state.is_active() {
                    state.extend_gesture(*point);
                } else {
                    state.set_hover_position(*point);
                }
            }
            Command::Up => state.end_gesture(),
            Command::Leave => state.pointer_left(),
            Command::Hover(point) => state.set_hover_position(*point),
            Command::Thickness(value) => state.set_thickness(*value),
            Command::Color(color) => state.set_color(*color),
            Command::Glyph(glyph) => state.set_glyph(glyph),
            Command::PlacingStamp(placing) => state.set_placing_stamp(*placing),
            Command::Undo => state.undo(),
            Command::Redo => state.redo(),
            Command::Clear => state.clear(),
            Command::Export(path) => return Step::Export(path.clone()),
        }
        Step::Continue
    }
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(parse_line(index + 1, line))
            }
        })
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };
    let invalid = |message: String| ScriptError::InvalidArgument { line, message };

    let command = match command.to_lowercase().as_str() {
        "down" => Command::Down(parse_point(rest).map_err(invalid)?),
        "move" => Command::Move(parse_point(rest).map_err(invalid)?),
        "hover" => Command::Hover(parse_point(rest).map_err(invalid)?),
        "up" => Command::Up,
        "leave" => Command::Leave,
        "thickness" => Command::Thickness(parse_number(rest).map_err(invalid)?),
        "color" => Command::Color(
            crate::util::parse_color(rest)
                .ok_or_else(|| invalid(format!("unknown color '{rest}'")))?,
        ),
        "glyph" => {
            if rest.is_empty() {
                return Err(invalid("glyph needs a symbol".to_string()));
            }
            Command::Glyph(rest.to_string())
        }
        "stamp" => match rest.to_lowercase().as_str() {
            "on" => Command::PlacingStamp(true),
            "off" => Command::PlacingStamp(false),
            other => return Err(invalid(format!("expected 'on' or 'off', got '{other}'"))),
        },
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "clear" => Command::Clear,
        "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    Ok(command)
}

fn parse_number(text: &str) -> Result<f64, String> {
    f64::from_str(text.trim()).map_err(|_| format!("expected a number, got '{text}'"))
}

fn parse_point(text: &str) -> Result<Point, String> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(format!("expected 'X Y', got '{text}'")),
    }
}
