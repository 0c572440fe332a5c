//! Scene content: a flat list of boxes with world-space bounds.
//!
//! The scene exists to give the camera something to look at and to frame.
//! Anything that can report a world-space [`Aabb`] implements
//! [`SceneBounds`] and can be framed by
//! [`DualCamera::fit_to_scene_bounding_sphere`](crate::camera::DualCamera::fit_to_scene_bounding_sphere).

use glam::Vec3;

use crate::math::Aabb;
use crate::options::DisplayOptions;

/// Position of the fixed reference box in the demo scene.
pub const ANCHOR_POSITION: Vec3 = Vec3::new(-1.2, 0.0, 0.0);

/// Half extents of a unit box.
pub const UNIT_HALF_EXTENTS: Vec3 = Vec3::splat(0.5);

/// Anything with a world-space bounding box.
pub trait SceneBounds {
    /// Axis-aligned box around all visible content. [`Aabb::EMPTY`] when
    /// there is nothing to show.
    fn world_bounds(&self) -> Aabb;
}

impl SceneBounds for Aabb {
    fn world_bounds(&self) -> Aabb {
        *self
    }
}

/// Which demo box an object is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectRole {
    /// Stays put.
    Anchor,
    /// Follows the editor counter along +X.
    Counter,
    /// Added by the host.
    Custom,
}

/// An axis-aligned box in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// What the box is for.
    pub role: ObjectRole,
    /// World-space center.
    pub center: Vec3,
    /// Half size along each axis.
    pub half_extents: Vec3,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Hidden objects are neither drawn nor framed.
    pub visible: bool,
}

impl SceneObject {
    /// A visible unit box.
    #[must_use]
    pub fn unit_box(role: ObjectRole, center: Vec3, color: [f32; 3]) -> Self {
        Self {
            role,
            center,
            half_extents: UNIT_HALF_EXTENTS,
            color,
            visible: true,
        }
    }

    /// World-space bounds of the box.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// The scene. Owns all objects in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    /// Bumped on any mutation so the renderer knows to re-upload.
    generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The editor demo: an anchor box and a box at `(count, 0, 0)`.
    #[must_use]
    pub fn demo(count: i32, display: &DisplayOptions) -> Self {
        let mut scene = Self::new();
        scene.push(SceneObject::unit_box(
            ObjectRole::Anchor,
            ANCHOR_POSITION,
            display.anchor_color,
        ));
        scene.push(SceneObject::unit_box(
            ObjectRole::Counter,
            counter_position(count),
            display.counter_color,
        ));
        scene
    }

    /// Add an object.
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
        self.generation += 1;
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.generation += 1;
    }

    /// Move every counter box to follow `count`.
    pub fn set_counter(&mut self, count: i32) {
        let position = counter_position(count);
        let mut moved = false;
        for object in &mut self.objects {
            if object.role == ObjectRole::Counter && object.center != position {
                object.center = position;
                moved = true;
            }
        }
        if moved {
            self.generation += 1;
        }
    }

    /// Objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Visible objects only.
    pub fn visible_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.visible)
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Mutation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl SceneBounds for Scene {
    fn world_bounds(&self) -> Aabb {
        self.visible_objects()
            .map(SceneObject::bounds)
            .fold(Aabb::EMPTY, Aabb::union)
    }
}

fn counter_position(count: i32) -> Vec3 {
    Vec3::new(count as f32, 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_places_anchor_and_counter() {
        let scene = Scene::demo(10, &DisplayOptions::default());
        let centers: Vec<Vec3> =
            scene.objects().iter().map(|o| o.center).collect();
        assert_eq!(centers, vec![ANCHOR_POSITION, Vec3::new(10.0, 0.0, 0.0)]);
    }

    #[test]
    fn bounds_cover_all_visible_boxes() {
        let scene = Scene::demo(5, &DisplayOptions::default());
        let bounds = scene.world_bounds();
        assert!(bounds.min.abs_diff_eq(Vec3::new(-1.7, -0.5, -0.5), 1e-6));
        assert!(bounds.max.abs_diff_eq(Vec3::new(5.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn hidden_objects_are_not_framed() {
        let mut scene = Scene::demo(5, &DisplayOptions::default());
        scene.objects[1].visible = false;
        let bounds = scene.world_bounds();
        assert!((bounds.max.x + 0.7).abs() < 1e-6);
    }

    #[test]
    fn empty_scene_has_empty_bounds() {
        assert!(Scene::new().world_bounds().is_empty());
    }

    #[test]
    fn counter_moves_only_counter_boxes() {
        let mut scene = Scene::demo(0, &DisplayOptions::default());
        let before = scene.generation();
        scene.set_counter(-5);
        assert_eq!(scene.objects()[0].center, ANCHOR_POSITION);
        assert_eq!(scene.objects()[1].center, Vec3::new(-5.0, 0.0, 0.0));
        assert!(scene.generation() > before);

        // Same count: nothing to re-upload
        let after = scene.generation();
        scene.set_counter(-5);
        assert_eq!(scene.generation(), after);
    }
}
