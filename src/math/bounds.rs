use glam::Vec3;

/// Axis-aligned bounding box.
///
/// The empty box has `min = +inf` and `max = -inf`, so expanding it by any
/// point yields that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// A box containing nothing.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Box centered on `center` with the given half extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box containing every point.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |aabb, p| aabb.expanded_by_point(p))
    }

    /// Whether the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x
            || self.max.y < self.min.y
            || self.max.z < self.min.z
    }

    /// Grow to include `point`.
    #[must_use]
    pub fn expanded_by_point(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center point, or `None` for the empty box.
    #[must_use]
    pub fn center(&self) -> Option<Vec3> {
        (!self.is_empty()).then(|| (self.min + self.max) * 0.5)
    }

    /// Edge lengths (zero for the empty box).
    #[must_use]
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Sphere through all eight corners, or `None` for the empty box.
    #[must_use]
    pub fn bounding_sphere(&self) -> Option<Sphere> {
        self.center().map(|center| Sphere {
            center,
            radius: self.size().length() * 0.5,
        })
    }
}

/// A sphere in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius (non-negative).
    pub radius: f32,
}

impl Sphere {
    /// Build from center and radius.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_has_no_center_or_sphere() {
        let aabb = Aabb::EMPTY;
        assert!(aabb.is_empty());
        assert_eq!(aabb.center(), None);
        assert_eq!(aabb.bounding_sphere(), None);
        assert_eq!(aabb.size(), Vec3::ZERO);
    }

    #[test]
    fn single_point_is_a_zero_size_box() {
        let aabb = Aabb::from_points([Vec3::new(1.0, 2.0, 3.0)]);
        assert!(!aabb.is_empty());
        let sphere = aabb.bounding_sphere().unwrap();
        assert_eq!(sphere.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius, 0.0);
    }

    #[test]
    fn unit_cube_sphere_radius() {
        let aabb =
            Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5));
        let sphere = aabb.bounding_sphere().unwrap();
        assert_eq!(sphere.center, Vec3::ZERO);
        assert!((sphere.radius - 3.0_f32.sqrt() * 0.5).abs() < 1e-6);
    }

    #[test]
    fn union_with_empty_is_identity() {
        let aabb = Aabb::from_points([Vec3::ONE, -Vec3::ONE]);
        assert_eq!(aabb.union(Aabb::EMPTY), aabb);
        assert_eq!(Aabb::EMPTY.union(aabb), aabb);
    }
}
