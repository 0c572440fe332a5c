//! Geometry primitives shared by the camera system.
//!
//! Vectors and matrices come from `glam`; this module adds spherical
//! coordinates and bounding volumes.

/// Axis-aligned boxes and spheres.
pub mod bounds;
/// Spherical coordinates around the +Y axis.
pub mod spherical;

pub use bounds::{Aabb, Sphere};
pub use spherical::{wrap_angle, Spherical};
