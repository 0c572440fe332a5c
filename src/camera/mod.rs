//! Camera system for 3D scene viewing.
//!
//! A [`DualCamera`] keeps a perspective and an orthographic camera on one
//! viewpoint and switches to the orthographic one while looking straight
//! down. An [`OrbitControls`] moves whichever camera is active.

/// Damped orbit/pan/dolly controller.
pub mod controller;
/// Controller trait, input vocabulary and capabilities.
pub mod controls;
/// Camera projections, borrowed camera handles and GPU uniform types.
pub mod core;
/// Perspective/orthographic camera pair and its switch logic.
pub mod dual;
/// Bounding-sphere framing of scene content.
pub mod fit;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use controller::OrbitControls;
pub use controls::{Capabilities, ControlInput, DragAction, ViewControls};
pub use self::core::{
    CameraMut, CameraPose, CameraRef, CameraUniform, OrthographicCamera,
    PerspectiveCamera, ProjectionKind,
};
pub use dual::DualCamera;
pub use frustum::Frustum;
