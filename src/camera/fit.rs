//! Bounding-sphere framing.

use glam::Vec3;

use super::controls::ViewControls;
use super::core::CameraRef;
use crate::math::Sphere;
use crate::scene::SceneBounds;

/// Bounding sphere of everything in `scene`.
///
/// An empty scene yields a sphere of `default_radius` around
/// `fallback_center`; a scene with no extent (a single point) yields one
/// around that point. The radius is never zero.
#[must_use]
pub fn scene_bounding_sphere(
    scene: &impl SceneBounds,
    fallback_center: Vec3,
    default_radius: f32,
) -> Sphere {
    let default_radius = default_radius.max(f32::EPSILON);
    match scene.world_bounds().bounding_sphere() {
        Some(sphere) if sphere.radius > 0.0 => sphere,
        Some(point) => Sphere::new(point.center, default_radius),
        None => Sphere::new(fallback_center, default_radius),
    }
}

/// Command `controls` to frame `scene` under the projection of `camera`.
///
/// Expects a controller whose capabilities include sphere fitting.
pub fn frame_scene(
    controls: &mut impl ViewControls,
    camera: CameraRef<'_>,
    scene: &impl SceneBounds,
    default_radius: f32,
    animate: bool,
) {
    let sphere =
        scene_bounding_sphere(scene, controls.target(), default_radius);
    log::debug!(
        "framing sphere at {:?} with radius {:.3}",
        sphere.center,
        sphere.radius
    );
    controls.fit_to_sphere(sphere, camera, animate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Aabb;

    #[test]
    fn empty_scene_uses_default_radius_at_fallback() {
        let sphere =
            scene_bounding_sphere(&Aabb::EMPTY, Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(sphere, Sphere::new(Vec3::new(1.0, 2.0, 3.0), 1.0));
    }

    #[test]
    fn point_scene_keeps_its_center() {
        let point = Aabb::from_points([Vec3::new(4.0, 0.0, 0.0)]);
        let sphere = scene_bounding_sphere(&point, Vec3::ZERO, 1.0);
        assert_eq!(sphere, Sphere::new(Vec3::new(4.0, 0.0, 0.0), 1.0));
    }

    #[test]
    fn unit_cube_has_half_diagonal_radius() {
        let cube = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5));
        let sphere = scene_bounding_sphere(&cube, Vec3::ONE, 1.0);
        assert_eq!(sphere.center, Vec3::ZERO);
        assert!((sphere.radius - 3.0_f32.sqrt() * 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_default_radius_stays_positive() {
        let sphere = scene_bounding_sphere(&Aabb::EMPTY, Vec3::ZERO, 0.0);
        assert!(sphere.radius > 0.0);
    }
}
