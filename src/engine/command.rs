//! The viewport's complete interactive vocabulary.
//!
//! Every user-facing operation (key press, mouse gesture, gizmo click or
//! programmatic call) is represented as a `ViewportCommand`. Consumers
//! construct commands and pass them to
//! [`EditorViewport::execute`](super::EditorViewport::execute).

use crate::camera::ControlInput;
use crate::gizmo::ViewCubeTarget;

/// A single operation on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Feed a gesture to the camera controller.
    Camera(ControlInput),

    /// Frame every visible object.
    FrameScene,

    /// Frame the scene and orbit to look from a view-cube element.
    ViewFrom(ViewCubeTarget),

    // ── Editor ──────────────────────────────────────────────────────
    /// Step the counter up, moving the counter box.
    Increment,

    /// Step the counter down, moving the counter box.
    Decrement,
}
