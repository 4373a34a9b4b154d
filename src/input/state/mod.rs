mod core;
mod pointer;
mod render;

pub use self::core::{DrawingState, InputState};
