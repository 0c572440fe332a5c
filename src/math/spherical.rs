use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Spherical coordinates around the +Y axis.
///
/// `phi` is the polar angle measured from +Y (0 = straight above the
/// origin), `theta` the azimuth measured around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y, in radians.
    pub phi: f32,
    /// Azimuthal angle around +Y from +Z towards +X, in radians.
    pub theta: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Spherical {
    /// Build from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a cartesian offset into spherical coordinates.
    ///
    /// A zero vector yields a zero radius with both angles at zero.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            // atan2 keeps precision near the poles where acos(y / r) does not
            phi: v.x.hypot(v.z).atan2(v.y),
        }
    }

    /// Convert back into a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

/// Wrap an angle difference into `(-PI, PI]`.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn x_axis_has_quarter_turn_azimuth() {
        let s = Spherical::from_vec3(Vec3::X);
        assert!((s.radius - 1.0).abs() < 1e-6);
        assert!((s.theta - FRAC_PI_2).abs() < 1e-6);
        assert!((s.phi - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn up_vector_is_polar_zero() {
        let s = Spherical::from_vec3(Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(s.phi, 0.0);
        assert_eq!(s.radius, 3.0);
    }

    #[test]
    fn zero_vector_is_degenerate_but_finite() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s, Spherical::new(0.0, 0.0, 0.0));
        assert_eq!(s.to_vec3(), Vec3::ZERO);
    }

    #[test]
    fn cartesian_conversion_recovers_offset() {
        let offset = Vec3::new(1.5, -2.0, 0.25);
        let back = Spherical::from_vec3(offset).to_vec3();
        assert!(back.abs_diff_eq(offset, 1e-5), "{back:?}");
    }

    #[test]
    fn wrap_angle_takes_short_way_round() {
        assert!((wrap_angle(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(0.25) - 0.25).abs() < 1e-6);
    }
}
