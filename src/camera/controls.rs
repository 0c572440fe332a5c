use glam::{Vec2, Vec3};

use super::core::{CameraMut, CameraRef, ProjectionKind};
use crate::math::Sphere;

/// What a pointer drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Orbit the camera around the target.
    Rotate,
    /// Slide camera and target across the view plane.
    Pan,
    /// Move towards or away from the target (zoom for orthographic).
    Dolly,
}

/// Input already interpreted as a camera gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    /// A drag started; subsequent deltas use the dragging damping factor.
    BeginDrag(DragAction),
    /// The active drag ended.
    EndDrag,
    /// Orbit by a pointer delta in pixels.
    Rotate {
        /// Pointer movement in physical pixels.
        delta: Vec2,
    },
    /// Pan by a pointer delta in pixels.
    Pan {
        /// Pointer movement in physical pixels.
        delta: Vec2,
    },
    /// Dolly or zoom (positive = closer).
    Dolly {
        /// Wheel/pinch amount in notches.
        amount: f32,
    },
}

/// Optional operations a controller supports beyond basic orbiting.
///
/// Queried once when a controller is attached to a
/// [`DualCamera`](super::dual::DualCamera).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Supports [`ViewControls::fit_to_sphere`].
    pub fit_to_sphere: bool,
    /// Supports [`ViewControls::rotate_to`].
    pub rotate_to: bool,
}

impl Capabilities {
    /// No optional operations.
    pub const NONE: Self = Self {
        fit_to_sphere: false,
        rotate_to: false,
    };

    /// Every optional operation.
    pub const ALL: Self = Self {
        fit_to_sphere: true,
        rotate_to: true,
    };
}

/// An interactive controller that drives one bound camera at a time.
///
/// The owner hands the bound camera in on every [`update`](Self::update);
/// the controller never holds a reference to it.
pub trait ViewControls {
    /// Bind to a different camera without resetting target or distance.
    ///
    /// Called after the owner has placed `camera` where the previously bound
    /// camera was, right after [`sync`](Self::sync). If the owner moved the
    /// eye since then, the orbit is re-derived from the new eye. In-flight
    /// motion carries over.
    fn bind(&mut self, camera: CameraRef<'_>);

    /// Which camera kind is currently bound.
    fn bound(&self) -> ProjectionKind;

    /// Feed one interpreted input. Ignored after [`dispose`](Self::dispose).
    fn handle_input(&mut self, input: ControlInput);

    /// Integrate pending motion and write the result into `camera`.
    ///
    /// Returns `true` if the camera changed.
    fn update(&mut self, dt: f32, camera: CameraMut<'_>) -> bool;

    /// Write the current placement into `camera` without integrating.
    ///
    /// Lets the owner copy a camera that reflects immediate commands issued
    /// since the last [`update`](Self::update). Returns `true` if the camera
    /// changed.
    fn sync(&mut self, camera: CameraMut<'_>) -> bool;

    /// Viewport size in physical pixels, used to scale pointer deltas.
    fn set_viewport_size(&mut self, width: u32, height: u32);

    /// Current polar angle from +Y, in radians.
    fn polar_angle(&self) -> f32;

    /// Current azimuthal angle, in radians.
    fn azimuth_angle(&self) -> f32;

    /// Current camera-to-target distance.
    fn distance(&self) -> f32;

    /// Current orbit pivot.
    fn target(&self) -> Vec3;

    /// Release input bindings. Further input is ignored.
    fn dispose(&mut self);

    /// Whether [`dispose`](Self::dispose) has been called.
    fn is_disposed(&self) -> bool;

    /// Optional operations this controller implements.
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    /// Frame `sphere` under the projection of `camera`.
    ///
    /// Only called when [`Capabilities::fit_to_sphere`] is set.
    fn fit_to_sphere(
        &mut self,
        _sphere: Sphere,
        _camera: CameraRef<'_>,
        _animate: bool,
    ) {
    }

    /// Orbit to azimuth `theta` and polar angle `phi`.
    ///
    /// Only called when [`Capabilities::rotate_to`] is set.
    fn rotate_to(&mut self, _theta: f32, _phi: f32, _animate: bool) {}
}
