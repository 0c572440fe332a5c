use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Projection parameters shared by the perspective/orthographic pair.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance (both cameras).
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance (both cameras).
    #[schemars(skip)]
    pub zfar: f32,
    /// Starting eye position.
    #[schemars(skip)]
    pub initial_eye: [f32; 3],
    /// Starting orbit pivot.
    #[schemars(skip)]
    pub initial_target: [f32; 3],
    /// Polar angle (radians) at or below which the top-down orthographic
    /// camera takes over.
    #[schemars(title = "Top-Down Threshold", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub ortho_switch_epsilon: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 70.0,
            znear: 0.1,
            zfar: 4000.0,
            initial_eye: [1.0, 1.0, 5.0],
            initial_target: [1.0, 1.0, 1.0],
            ortho_switch_epsilon: 0.001,
        }
    }
}
