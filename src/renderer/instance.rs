//! Per-box GPU instance data.

use bytemuck::{Pod, Zeroable};

use crate::scene::{Scene, SceneObject};

/// One box as the scene shader reads it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BoxInstance {
    /// World-space center.
    pub center: [f32; 3],
    pub(crate) _pad0: f32,
    /// Half size along each axis.
    pub half_extents: [f32; 3],
    pub(crate) _pad1: f32,
    /// Linear RGBA color.
    pub color: [f32; 4],
}

impl From<&SceneObject> for BoxInstance {
    fn from(object: &SceneObject) -> Self {
        let [r, g, b] = object.color;
        Self {
            center: object.center.to_array(),
            _pad0: 0.0,
            half_extents: object.half_extents.to_array(),
            _pad1: 0.0,
            color: [r, g, b, 1.0],
        }
    }
}

/// Instances for every visible object, in scene order.
#[must_use]
pub fn box_instances(scene: &Scene) -> Vec<BoxInstance> {
    scene.visible_objects().map(BoxInstance::from).collect()
}

/// Lighting parameters shared by every box.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShadingUniform {
    /// Brightness of faces turned away from the light.
    pub ambient: f32,
    pub(crate) _pad: [f32; 3],
}

impl ShadingUniform {
    /// Uniform with the given ambient term, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(ambient: f32) -> Self {
        Self {
            ambient: ambient.clamp(0.0, 1.0),
            _pad: [0.0; 3],
        }
    }
}
