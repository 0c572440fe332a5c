//! Input handling: event types, the click state machine, and the input
//! processor that converts raw window events into viewport commands.

/// Platform-agnostic input events.
pub mod event;
/// Double-click state machine and mouse position tracking.
pub(crate) mod mouse;
/// Converts raw events into viewport commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
