//! View frustum for visibility tests
//!
//! Extracts frustum planes from the view-projection matrix of either camera
//! kind and answers point and sphere containment queries. Framing checks use
//! it to confirm a fitted sphere is actually on screen.

use glam::{Mat4, Vec3, Vec4};

use super::core::CameraRef;
use crate::math::Sphere;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from homogeneous coefficients and normalize it
    pub fn from_coefficients(v: Vec4) -> Self {
        let len = v.truncate().length();
        if len > 0.0 {
            Self {
                normal: v.truncate() / len,
                distance: v.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    /// Planes point inward (positive half-space is inside the frustum).
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        // For right-handed system with [0,1] depth range (wgpu/Vulkan)
        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Frustum of a perspective or orthographic camera.
    pub fn from_camera(camera: CameraRef<'_>) -> Self {
        Self::from_view_projection(camera.view_projection())
    }

    /// Test if a point is inside the frustum
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.planes.iter().all(|plane| {
            plane.distance_to_point(sphere.center) >= -sphere.radius
        })
    }

    /// Test if a sphere is completely inside the frustum, allowing it to
    /// poke out by `tolerance` world units.
    #[inline]
    pub fn contains_sphere(&self, sphere: &Sphere, tolerance: f32) -> bool {
        self.planes.iter().all(|plane| {
            plane.distance_to_point(sphere.center) >= sphere.radius - tolerance
        })
    }
}
