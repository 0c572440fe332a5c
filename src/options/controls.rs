use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Orbit controller tuning: speeds, damping and limits.
pub struct ControlsOptions {
    /// Whether motion eases towards its goal instead of jumping.
    #[schemars(title = "Smooth Motion")]
    pub enable_damping: bool,
    /// Fraction of the remaining motion covered per 60 Hz frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Damping used while a drag is in progress.
    #[schemars(title = "Drag Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub dragging_damping_factor: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Dolly/zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub dolly_speed: f32,
    /// Closest the perspective camera may get to the pivot.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the perspective camera may get from the pivot.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Smallest orthographic zoom.
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest orthographic zoom.
    #[schemars(skip)]
    pub max_zoom: f32,
    /// Lower polar angle limit in radians (0 = straight down at the pivot).
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Upper polar angle limit in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Residual below which motion snaps to its goal.
    #[schemars(skip)]
    pub rest_threshold: f32,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            dragging_damping_factor: 0.25,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            dolly_speed: 1.0,
            min_distance: 0.01,
            max_distance: 2000.0,
            min_zoom: 0.01,
            max_zoom: 1000.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            rest_threshold: 0.0025,
        }
    }
}

impl ControlsOptions {
    /// Copy with every limit pair in order and the polar limits inside
    /// `[0, PI]`, so the limits can be fed to `f32::clamp`.
    ///
    /// Swapped pairs are reordered and non-positive distance or zoom
    /// minimums fall back to the defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        let (min_distance, max_distance) =
            ordered(self.min_distance, self.max_distance);
        self.min_distance = positive_or(min_distance, defaults.min_distance);
        self.max_distance = max_distance.max(self.min_distance);

        let (min_zoom, max_zoom) = ordered(self.min_zoom, self.max_zoom);
        self.min_zoom = positive_or(min_zoom, defaults.min_zoom);
        self.max_zoom = max_zoom.max(self.min_zoom);

        let (min_polar, max_polar) =
            ordered(self.min_polar_angle, self.max_polar_angle);
        self.min_polar_angle = finite_or(min_polar, 0.0).clamp(0.0, PI);
        self.max_polar_angle =
            finite_or(max_polar, PI).clamp(self.min_polar_angle, PI);

        self.rest_threshold = finite_or(self.rest_threshold, 0.0).max(0.0);
        self
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_normalized() {
        let defaults = ControlsOptions::default();
        assert_eq!(defaults.clone().normalized(), defaults);
    }

    #[test]
    fn swapped_limits_are_reordered() {
        let options = ControlsOptions {
            min_distance: 10.0,
            max_distance: 1.0,
            min_zoom: 50.0,
            max_zoom: 2.0,
            min_polar_angle: 2.0,
            max_polar_angle: 0.5,
            ..ControlsOptions::default()
        }
        .normalized();
        assert_eq!((options.min_distance, options.max_distance), (1.0, 10.0));
        assert_eq!((options.min_zoom, options.max_zoom), (2.0, 50.0));
        assert_eq!(
            (options.min_polar_angle, options.max_polar_angle),
            (0.5, 2.0)
        );
    }

    #[test]
    fn out_of_range_limits_are_pulled_in() {
        let options = ControlsOptions {
            min_distance: -3.0,
            max_distance: f32::NAN,
            min_zoom: 0.0,
            min_polar_angle: -1.0,
            max_polar_angle: 7.0,
            rest_threshold: -0.5,
            ..ControlsOptions::default()
        }
        .normalized();
        assert_eq!(options.min_distance, 0.01);
        assert!(options.max_distance >= options.min_distance);
        assert_eq!(options.min_zoom, 0.01);
        assert_eq!(options.min_polar_angle, 0.0);
        assert_eq!(options.max_polar_angle, PI);
        assert_eq!(options.rest_threshold, 0.0);
    }
}
