use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::controls::{Capabilities, ControlInput, DragAction, ViewControls};
use super::core::{CameraMut, CameraPose, CameraRef, ProjectionKind};
use crate::math::{wrap_angle, Sphere, Spherical};
use crate::options::ControlsOptions;

/// Frame rate the damping factors are expressed against.
const DAMPING_REFERENCE_FPS: f32 = 60.0;

/// Per-notch dolly scale.
const DOLLY_STEP: f32 = 0.95;

/// Below this `sin(phi)` the camera is treated as looking along the up axis
/// and the screen-up vector is derived from the azimuth instead.
const POLE_SIN_THRESHOLD: f32 = 1e-3;

/// Projection data needed to convert pixel deltas into world distances.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewScale {
    Perspective { fovy: f32 },
    Orthographic { extent_height: f32 },
}

/// Orbit/pan/dolly controller with damped motion.
///
/// Inputs move *goal* values (`*_end`); [`update`](ViewControls::update)
/// eases the current values towards them and writes the camera. Animated
/// commands such as [`rotate_to`](ViewControls::rotate_to) simply replace
/// the goal, so a newer command supersedes one still in flight.
pub struct OrbitControls {
    bound: ProjectionKind,
    target: Vec3,
    target_end: Vec3,
    spherical: Spherical,
    spherical_end: Spherical,
    zoom: f32,
    zoom_end: f32,
    viewport: Vec2,
    view_scale: ViewScale,
    dragging: Option<DragAction>,
    last_pose: Option<CameraPose>,
    disposed: bool,
    settings: ControlsOptions,
}

impl OrbitControls {
    /// Create a controller bound to `camera`, orbiting its look-at target.
    #[must_use]
    pub fn new(
        camera: CameraRef<'_>,
        settings: ControlsOptions,
        viewport: (u32, u32),
    ) -> Self {
        let settings = settings.normalized();
        let pose = camera.pose();
        let spherical = Self::clamp_spherical(
            &settings,
            Spherical::from_vec3(pose.eye - pose.target),
        );
        let zoom = match camera {
            CameraRef::Perspective(_) => 1.0,
            CameraRef::Orthographic(c) => c.zoom,
        };
        let mut controls = Self {
            bound: camera.kind(),
            target: pose.target,
            target_end: pose.target,
            spherical,
            spherical_end: spherical,
            zoom,
            zoom_end: zoom,
            viewport: Vec2::ONE,
            view_scale: ViewScale::Perspective { fovy: 60.0 },
            dragging: None,
            last_pose: None,
            disposed: false,
            settings,
        };
        controls.set_viewport_size(viewport.0, viewport.1);
        controls.refresh_view_scale(camera);
        controls
    }

    /// Current orthographic zoom (1 while a perspective camera is bound).
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Goal the camera is easing towards.
    #[must_use]
    pub fn goal(&self) -> (Vec3, Spherical) {
        (self.target_end, self.spherical_end)
    }

    /// Whether any drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> Option<DragAction> {
        self.dragging
    }

    /// Whether current values have reached their goals.
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.spherical == self.spherical_end
            && self.target == self.target_end
            && self.zoom == self.zoom_end
    }

    /// Tuning parameters in use.
    #[must_use]
    pub fn settings(&self) -> &ControlsOptions {
        &self.settings
    }

    /// Move the orbit pivot (and the camera with it).
    pub fn move_to(&mut self, target: Vec3, animate: bool) {
        self.target_end = target;
        if !animate {
            self.target = target;
        }
    }

    /// Set the camera-to-target distance.
    pub fn dolly_to(&mut self, distance: f32, animate: bool) {
        self.spherical_end.radius = self.clamp_distance(distance);
        if !animate {
            self.spherical.radius = self.spherical_end.radius;
        }
    }

    /// Set the orthographic zoom.
    pub fn zoom_to(&mut self, zoom: f32, animate: bool) {
        self.zoom_end = self.clamp_zoom(zoom);
        if !animate {
            self.zoom = self.zoom_end;
        }
    }

    fn clamp_spherical(settings: &ControlsOptions, s: Spherical) -> Spherical {
        Spherical {
            radius: s
                .radius
                .clamp(settings.min_distance, settings.max_distance),
            phi: s
                .phi
                .clamp(settings.min_polar_angle, settings.max_polar_angle),
            theta: s.theta,
        }
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.settings.min_distance, self.settings.max_distance)
    }

    fn clamp_polar(&self, phi: f32) -> f32 {
        phi.clamp(self.settings.min_polar_angle, self.settings.max_polar_angle)
    }

    fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.settings.min_zoom, self.settings.max_zoom)
    }

    fn refresh_view_scale(&mut self, camera: CameraRef<'_>) {
        self.view_scale = match camera {
            CameraRef::Perspective(c) => {
                ViewScale::Perspective { fovy: c.fovy }
            }
            CameraRef::Orthographic(c) => ViewScale::Orthographic {
                extent_height: c.top - c.bottom,
            },
        };
    }

    /// World units covered by one vertical pixel at the target.
    fn world_per_pixel(&self) -> f32 {
        let visible_height = match self.view_scale {
            ViewScale::Perspective { fovy } => {
                2.0 * (fovy.to_radians() * 0.5).tan() * self.spherical.radius
            }
            ViewScale::Orthographic { extent_height } => {
                extent_height / self.zoom
            }
        };
        visible_height / self.viewport.y
    }

    fn rotate(&mut self, delta: Vec2) {
        let scale = TAU * self.settings.rotate_speed / self.viewport.y;
        self.spherical_end.theta -= delta.x * scale;
        let phi = self.spherical_end.phi - delta.y * scale;
        self.spherical_end.phi = self.clamp_polar(phi);
    }

    fn pan(&mut self, delta: Vec2) {
        let (right, up) = screen_axes(self.spherical);
        let scale = self.world_per_pixel() * self.settings.pan_speed;
        self.target_end += (-right * delta.x + up * delta.y) * scale;
    }

    fn dolly(&mut self, amount: f32) {
        let factor = DOLLY_STEP.powf(amount * self.settings.dolly_speed);
        match self.bound {
            ProjectionKind::Perspective => {
                self.spherical_end.radius =
                    self.clamp_distance(self.spherical_end.radius * factor);
            }
            ProjectionKind::Orthographic => {
                self.zoom_end = self.clamp_zoom(self.zoom_end / factor);
            }
        }
    }

    /// Fraction of the remaining distance covered this frame.
    fn blend(&self, dt: f32) -> f32 {
        if !self.settings.enable_damping {
            return 1.0;
        }
        let factor = if self.dragging.is_some() {
            self.settings.dragging_damping_factor
        } else {
            self.settings.damping_factor
        };
        let frames = dt.max(0.0) * DAMPING_REFERENCE_FPS;
        1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames)
    }

    fn compute_pose(&self) -> CameraPose {
        CameraPose {
            eye: self.target + self.spherical.to_vec3(),
            target: self.target,
            up: view_up(self.spherical),
        }
    }

    /// Write the current pose (and orthographic zoom) into `camera`.
    fn write_camera(&mut self, mut camera: CameraMut<'_>) -> bool {
        let pose = self.compute_pose();
        let mut changed = *camera.pose_mut() != pose;
        *camera.pose_mut() = pose;
        if let CameraMut::Orthographic(ortho) = &mut camera {
            if ortho.zoom != self.zoom {
                ortho.zoom = self.zoom;
                ortho.update_projection_matrix();
                changed = true;
            }
        }
        self.last_pose = Some(pose);
        changed
    }
}

/// Move `current` towards `goal`, snapping once within `threshold`.
fn approach(current: f32, goal: f32, t: f32, threshold: f32) -> f32 {
    let delta = goal - current;
    if delta.abs() <= threshold {
        goal
    } else {
        current + delta * t
    }
}

fn approach_vec3(current: Vec3, goal: Vec3, t: f32, threshold: f32) -> Vec3 {
    let delta = goal - current;
    if delta.length() <= threshold {
        goal
    } else {
        current + delta * t
    }
}

/// Screen-up direction for a camera at `s` looking at the origin.
///
/// Uses +Y except when looking (almost) straight along it, where the
/// horizontal direction the camera is leaning away from takes over so the
/// view stays continuous through the pole.
fn view_up(s: Spherical) -> Vec3 {
    if s.phi.sin().abs() >= POLE_SIN_THRESHOLD {
        return Vec3::Y;
    }
    let horizontal = Vec3::new(s.theta.sin(), 0.0, s.theta.cos());
    if s.phi.cos() > 0.0 {
        -horizontal
    } else {
        horizontal
    }
}

/// Camera right and up axes in world space.
fn screen_axes(s: Spherical) -> (Vec3, Vec3) {
    let forward = -s.to_vec3().normalize_or(Vec3::Z);
    let right = forward
        .cross(view_up(s))
        .normalize_or(Vec3::new(s.theta.cos(), 0.0, -s.theta.sin()));
    let up = right.cross(forward);
    (right, up)
}

impl ViewControls for OrbitControls {
    fn bind(&mut self, camera: CameraRef<'_>) {
        self.bound = camera.kind();
        self.refresh_view_scale(camera);

        let pose = camera.pose();
        let offset = pose.eye - self.target;
        let moved =
            !matches!(self.last_pose, Some(last) if last.eye == pose.eye);
        if moved && offset.length_squared() > 0.0 {
            // The owner moved the camera; adopt its placement but keep the
            // in-flight residuals.
            let d_theta = self.spherical_end.theta - self.spherical.theta;
            let d_phi = self.spherical_end.phi - self.spherical.phi;
            let radius_ratio =
                self.spherical_end.radius / self.spherical.radius;

            let resynced = Self::clamp_spherical(
                &self.settings,
                Spherical::from_vec3(offset),
            );
            self.spherical = resynced;
            self.spherical_end = Self::clamp_spherical(
                &self.settings,
                Spherical {
                    radius: resynced.radius * radius_ratio,
                    phi: resynced.phi + d_phi,
                    theta: resynced.theta + d_theta,
                },
            );
        }

        match camera {
            CameraRef::Perspective(_) => {
                self.zoom = 1.0;
                self.zoom_end = 1.0;
            }
            CameraRef::Orthographic(c) => {
                self.zoom = c.zoom;
                self.zoom_end = c.zoom;
            }
        }
        self.last_pose = None;
    }

    fn bound(&self) -> ProjectionKind {
        self.bound
    }

    fn handle_input(&mut self, input: ControlInput) {
        if self.disposed {
            return;
        }
        match input {
            ControlInput::BeginDrag(action) => self.dragging = Some(action),
            ControlInput::EndDrag => self.dragging = None,
            ControlInput::Rotate { delta } => self.rotate(delta),
            ControlInput::Pan { delta } => self.pan(delta),
            ControlInput::Dolly { amount } => self.dolly(amount),
        }
    }

    fn update(&mut self, dt: f32, camera: CameraMut<'_>) -> bool {
        if self.disposed {
            return false;
        }
        self.refresh_view_scale(camera.reborrow());

        let t = self.blend(dt);
        let threshold = self.settings.rest_threshold;
        let radius_threshold = threshold * self.spherical.radius.max(1.0);

        self.spherical.theta = approach(
            self.spherical.theta,
            self.spherical_end.theta,
            t,
            threshold,
        );
        self.spherical.phi =
            approach(self.spherical.phi, self.spherical_end.phi, t, threshold);
        self.spherical.radius = approach(
            self.spherical.radius,
            self.spherical_end.radius,
            t,
            radius_threshold,
        );
        self.target =
            approach_vec3(self.target, self.target_end, t, radius_threshold);
        self.zoom = approach(
            self.zoom,
            self.zoom_end,
            t,
            threshold * self.zoom_end.max(1.0),
        );

        self.write_camera(camera)
    }

    fn sync(&mut self, camera: CameraMut<'_>) -> bool {
        if self.disposed {
            return false;
        }
        self.write_camera(camera)
    }

    fn set_viewport_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    fn azimuth_angle(&self) -> f32 {
        self.spherical.theta
    }

    fn distance(&self) -> f32 {
        self.spherical.radius
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.dragging = None;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn fit_to_sphere(
        &mut self,
        sphere: Sphere,
        camera: CameraRef<'_>,
        animate: bool,
    ) {
        match camera {
            CameraRef::Perspective(c) => {
                let vertical = c.fovy.to_radians();
                let fov = if c.aspect > 1.0 {
                    vertical
                } else {
                    c.horizontal_fov()
                };
                self.dolly_to(sphere.radius / (fov * 0.5).sin(), animate);
            }
            CameraRef::Orthographic(c) => {
                let diameter = 2.0 * sphere.radius;
                let zoom = ((c.right - c.left) / diameter)
                    .min((c.top - c.bottom) / diameter);
                self.zoom_to(zoom, animate);
            }
        }
        self.move_to(sphere.center, animate);
    }

    fn rotate_to(&mut self, theta: f32, phi: f32, animate: bool) {
        // Shortest way round from where the camera is now
        self.spherical_end.theta =
            self.spherical.theta + wrap_angle(theta - self.spherical.theta);
        self.spherical_end.phi = self.clamp_polar(phi);
        if !animate {
            self.spherical.theta = self.spherical_end.theta;
            self.spherical.phi = self.spherical_end.phi;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::camera::core::{OrthographicCamera, PerspectiveCamera};

    const DT: f32 = 1.0 / 60.0;

    fn perspective() -> PerspectiveCamera {
        PerspectiveCamera::new(
            CameraPose::look_at(
                Vec3::new(1.0, 1.0, 5.0),
                Vec3::new(1.0, 1.0, 1.0),
            ),
            70.0,
            1.0,
            0.1,
            4000.0,
        )
    }

    fn controls(cam: &PerspectiveCamera) -> OrbitControls {
        OrbitControls::new(
            CameraRef::Perspective(cam),
            ControlsOptions::default(),
            (800, 800),
        )
    }

    fn settle(ctrl: &mut OrbitControls, cam: &mut PerspectiveCamera) {
        for _ in 0..2000 {
            let _ = ctrl.update(DT, CameraMut::Perspective(cam));
            if ctrl.is_resting() {
                break;
            }
        }
        assert!(ctrl.is_resting());
    }

    #[test]
    fn starts_from_camera_placement() {
        let cam = perspective();
        let ctrl = controls(&cam);
        assert!((ctrl.distance() - 4.0).abs() < 1e-6);
        assert!((ctrl.polar_angle() - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(ctrl.azimuth_angle(), 0.0);
        assert_eq!(ctrl.target(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn idle_update_leaves_camera_unchanged() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        let _ = ctrl.update(DT, CameraMut::Perspective(&mut cam));
        let before = cam.pose;
        assert!(!ctrl.update(DT, CameraMut::Perspective(&mut cam)));
        assert_eq!(cam.pose, before);
    }

    #[test]
    fn damping_decays_towards_goal() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(0.0, 100.0),
        });
        let goal = ctrl.goal().1.phi;
        let mut last_gap = (ctrl.polar_angle() - goal).abs();
        for _ in 0..5 {
            assert!(ctrl.update(DT, CameraMut::Perspective(&mut cam)));
            let gap = (ctrl.polar_angle() - goal).abs();
            assert!(gap < last_gap);
            last_gap = gap;
        }
        settle(&mut ctrl, &mut cam);
        assert_eq!(ctrl.polar_angle(), goal);
    }

    #[test]
    fn dragging_down_raises_camera_to_top() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(0.0, 10_000.0),
        });
        settle(&mut ctrl, &mut cam);
        assert_eq!(ctrl.polar_angle(), 0.0);
        // Camera sits straight above the pivot at unchanged distance
        let offset = cam.pose.eye - cam.pose.target;
        assert!((offset.y - 4.0).abs() < 1e-4);
        assert!(offset.x.abs() < 1e-4 && offset.z.abs() < 1e-4);
        // Screen-up stays well defined at the pole
        assert!(cam.pose.up.dot(offset).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_stays_in_range() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(0.0, -50_000.0),
        });
        settle(&mut ctrl, &mut cam);
        assert!(ctrl.polar_angle() <= PI);
        assert!(ctrl.polar_angle() >= 0.0);
    }

    #[test]
    fn dolly_changes_distance_but_never_below_minimum() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Dolly { amount: 1.0 });
        settle(&mut ctrl, &mut cam);
        assert!((ctrl.distance() - 4.0 * 0.95).abs() < 1e-3);

        ctrl.handle_input(ControlInput::Dolly { amount: 10_000.0 });
        settle(&mut ctrl, &mut cam);
        assert!(ctrl.distance() > 0.0);
        assert_eq!(ctrl.distance(), ctrl.settings().min_distance);
    }

    #[test]
    fn pan_moves_target_against_pointer() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Pan {
            delta: Vec2::new(100.0, 0.0),
        });
        settle(&mut ctrl, &mut cam);
        // Camera looks down -Z, so screen right is +X
        assert!(ctrl.target().x < 1.0);
        assert!((ctrl.target().y - 1.0).abs() < 1e-5);
        // Distance preserved while panning
        assert!((ctrl.distance() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn ortho_dolly_zooms_instead_of_moving() {
        let mut ortho = OrthographicCamera::new(
            CameraPose::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO),
            Vec2::new(2.0, 2.0),
            0.1,
            100.0,
        );
        let mut ctrl = OrbitControls::new(
            CameraRef::Orthographic(&ortho),
            ControlsOptions::default(),
            (800, 800),
        );
        ctrl.handle_input(ControlInput::Dolly { amount: 2.0 });
        for _ in 0..2000 {
            let _ = ctrl.update(DT, CameraMut::Orthographic(&mut ortho));
        }
        assert!(ctrl.is_resting());
        assert!((ortho.zoom - 1.0 / (0.95 * 0.95)).abs() < 1e-3);
        assert!((ctrl.distance() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_to_without_animation_is_immediate() {
        let cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.rotate_to(FRAC_PI_2, 0.5, false);
        assert_eq!(ctrl.azimuth_angle(), FRAC_PI_2);
        assert_eq!(ctrl.polar_angle(), 0.5);
    }

    #[test]
    fn rotate_to_takes_short_way_round() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.rotate_to(-3.0, FRAC_PI_2, true);
        ctrl.rotate_to(3.0, FRAC_PI_2, true);
        // From 0, +3 is closer than going through the -3 side
        assert!((ctrl.goal().1.theta - 3.0).abs() < 1e-5);
        settle(&mut ctrl, &mut cam);
        assert!((ctrl.azimuth_angle() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn newer_command_supersedes_in_flight_one() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.rotate_to(1.0, 1.0, true);
        let _ = ctrl.update(DT, CameraMut::Perspective(&mut cam));
        ctrl.rotate_to(-1.0, 0.5, true);
        settle(&mut ctrl, &mut cam);
        assert!((ctrl.azimuth_angle() + 1.0).abs() < 1e-5);
        assert!((ctrl.polar_angle() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn fit_to_sphere_uses_narrower_fov() {
        let mut cam = perspective();
        cam.aspect = 0.5;
        let mut ctrl = controls(&cam);
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        ctrl.fit_to_sphere(sphere, CameraRef::Perspective(&cam), false);
        let expected = 2.0 / (cam.horizontal_fov() * 0.5).sin();
        assert!((ctrl.distance() - expected).abs() < 1e-4);
        assert_eq!(ctrl.target(), Vec3::ZERO);
    }

    #[test]
    fn disposed_controller_ignores_input() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.dispose();
        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(300.0, 300.0),
        });
        assert!(ctrl.is_resting());
        assert!(!ctrl.update(DT, CameraMut::Perspective(&mut cam)));
        assert!(ctrl.is_disposed());
    }

    #[test]
    fn rebinding_mid_drag_keeps_residual_motion() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::BeginDrag(DragAction::Rotate));
        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(200.0, 0.0),
        });
        let _ = ctrl.update(DT, CameraMut::Perspective(&mut cam));
        let residual = ctrl.goal().1.theta - ctrl.azimuth_angle();
        assert!(residual.abs() > 0.0);

        // Same placement handed back, as after a projection swap
        let ortho = OrthographicCamera::new(
            cam.pose,
            Vec2::new(1.0, 1.0),
            0.1,
            4000.0,
        );
        ctrl.bind(CameraRef::Orthographic(&ortho));
        assert_eq!(ctrl.bound(), ProjectionKind::Orthographic);
        let carried = ctrl.goal().1.theta - ctrl.azimuth_angle();
        assert!((carried - residual).abs() < 1e-5);
        assert_eq!(ctrl.dragging(), Some(DragAction::Rotate));
        assert_eq!(ctrl.target(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn sync_writes_immediate_snap_without_integrating() {
        let mut cam = perspective();
        let mut ctrl = controls(&cam);
        ctrl.handle_input(ControlInput::Dolly { amount: 3.0 });
        ctrl.rotate_to(0.0, 0.0, false);

        assert!(ctrl.sync(CameraMut::Perspective(&mut cam)));
        assert!(cam.pose.eye.abs_diff_eq(Vec3::new(1.0, 5.0, 1.0), 1e-5));
        // Pending dolly is left for the next update
        assert!((ctrl.distance() - 4.0).abs() < 1e-6);
        assert!(!ctrl.is_resting());

        // Binding the synced placement keeps the snapped angles
        ctrl.bind(CameraRef::Perspective(&cam));
        assert_eq!(ctrl.polar_angle(), 0.0);
        assert!(!ctrl.sync(CameraMut::Perspective(&mut cam)));
    }

    #[test]
    fn bind_to_eye_on_pivot_keeps_orbit() {
        let cam = perspective();
        let mut ctrl = controls(&cam);
        let mut degenerate = cam.clone();
        degenerate.pose.eye = degenerate.pose.target;
        ctrl.bind(CameraRef::Perspective(&degenerate));
        assert!((ctrl.distance() - 4.0).abs() < 1e-6);
        assert!((ctrl.polar_angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn swapped_limits_do_not_panic() {
        let mut cam = perspective();
        let settings = ControlsOptions {
            min_distance: 100.0,
            max_distance: 2.0,
            min_zoom: 10.0,
            max_zoom: 0.5,
            min_polar_angle: 2.0,
            max_polar_angle: 0.5,
            ..ControlsOptions::default()
        };
        let mut ctrl = OrbitControls::new(
            CameraRef::Perspective(&cam),
            settings,
            (800, 800),
        );
        assert!(ctrl.settings().min_distance <= ctrl.settings().max_distance);
        assert!((ctrl.distance() - 4.0).abs() < 1e-6);

        ctrl.handle_input(ControlInput::Rotate {
            delta: Vec2::new(0.0, 400.0),
        });
        ctrl.handle_input(ControlInput::Dolly { amount: -100.0 });
        settle(&mut ctrl, &mut cam);
        assert!((ctrl.polar_angle() - 0.5).abs() < 1e-6);
        assert!((ctrl.distance() - 100.0).abs() < 1e-3);
    }
}
