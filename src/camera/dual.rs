//! Perspective/orthographic camera pair driven by one controller.
//!
//! The pair shares a single logical viewpoint. While the controller looks
//! straight down onto its pivot the orthographic camera is active; at any
//! other angle the perspective camera is. The switch is re-evaluated at the
//! start of every [`DualCamera::update`], before the controller integrates
//! new input, and the camera becoming active is first placed and sized so
//! the view does not jump.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec3};

use super::controller::OrbitControls;
use super::controls::{Capabilities, ControlInput, ViewControls};
use super::core::{
    matching_ortho_half_extents, CameraMut, CameraPose, CameraRef,
    OrthographicCamera, PerspectiveCamera, ProjectionKind,
};
use super::fit::frame_scene;
use crate::math::Spherical;
use crate::options::{CameraOptions, ControlsOptions, SceneFitOptions};
use crate::scene::SceneBounds;

/// Steepest polar angle at which leaving the orthographic camera still folds
/// its zoom into the perspective eye height.
const ZOOM_FOLD_MAX_POLAR: f32 = FRAC_PI_4;

/// Two projections of one viewpoint plus the controller that moves them.
///
/// Owns both cameras and the controller exclusively. Consumers name the
/// active camera through the [`ProjectionKind`] handle returned by
/// [`active`](Self::active), or borrow it for one frame through
/// [`current`](Self::current).
pub struct DualCamera<C: ViewControls = OrbitControls> {
    perspective: PerspectiveCamera,
    orthographic: OrthographicCamera,
    active: ProjectionKind,
    controls: C,
    capabilities: Capabilities,
    switch_epsilon: f32,
    default_fit_radius: f32,
    viewport: (u32, u32),
    disposed: bool,
}

impl DualCamera<OrbitControls> {
    /// Create the camera pair with an [`OrbitControls`] bound to the
    /// perspective camera.
    #[must_use]
    pub fn new(
        camera: &CameraOptions,
        controls: &ControlsOptions,
        scene_fit: &SceneFitOptions,
        viewport: (u32, u32),
    ) -> Self {
        let settings = controls.clone();
        Self::with_controls(camera, scene_fit, viewport, move |initial| {
            OrbitControls::new(initial, settings, viewport)
        })
    }
}

impl<C: ViewControls> DualCamera<C> {
    /// Create the camera pair with a custom controller.
    ///
    /// `make_controls` receives the initial (perspective) camera. Its
    /// capabilities are queried once, here.
    pub fn with_controls(
        camera: &CameraOptions,
        scene_fit: &SceneFitOptions,
        viewport: (u32, u32),
        make_controls: impl FnOnce(CameraRef<'_>) -> C,
    ) -> Self {
        let (width, height) = (viewport.0.max(1), viewport.1.max(1));
        let aspect = width as f32 / height as f32;
        let pose = CameraPose::look_at(
            Vec3::from_array(camera.initial_eye),
            Vec3::from_array(camera.initial_target),
        );

        let perspective = PerspectiveCamera::new(
            pose,
            camera.fovy,
            aspect,
            camera.znear,
            camera.zfar,
        );
        let orthographic = OrthographicCamera::new(
            pose,
            matching_ortho_half_extents(camera.fovy, aspect, pose.distance()),
            camera.znear,
            camera.zfar,
        );

        let controls = make_controls(CameraRef::Perspective(&perspective));
        let capabilities = controls.capabilities();

        Self {
            perspective,
            orthographic,
            active: ProjectionKind::Perspective,
            controls,
            capabilities,
            switch_epsilon: camera.ortho_switch_epsilon,
            default_fit_radius: scene_fit.default_radius,
            viewport: (width, height),
            disposed: false,
        }
    }

    /// Handle of the camera to render with.
    #[must_use]
    pub fn active(&self) -> ProjectionKind {
        self.active
    }

    /// Borrow the camera to render with.
    #[must_use]
    pub fn current(&self) -> CameraRef<'_> {
        camera_ref(self.active, &self.perspective, &self.orthographic)
    }

    /// Borrow a camera by handle.
    #[must_use]
    pub fn camera(&self, kind: ProjectionKind) -> CameraRef<'_> {
        camera_ref(kind, &self.perspective, &self.orthographic)
    }

    /// The perspective camera, active or not.
    #[must_use]
    pub fn perspective(&self) -> &PerspectiveCamera {
        &self.perspective
    }

    /// The orthographic camera, active or not.
    #[must_use]
    pub fn orthographic(&self) -> &OrthographicCamera {
        &self.orthographic
    }

    /// View-projection matrix of the active camera.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.current().view_projection()
    }

    /// The controller.
    #[must_use]
    pub fn controls(&self) -> &C {
        &self.controls
    }

    /// Mutable access to the controller.
    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    /// Optional controller operations, as queried at construction.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Polar angle at or below which the orthographic camera is used.
    #[must_use]
    pub fn switch_epsilon(&self) -> f32 {
        self.switch_epsilon
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Forward one interpreted input to the controller.
    pub fn handle_input(&mut self, input: ControlInput) {
        if !self.disposed {
            self.controls.handle_input(input);
        }
    }

    /// Advance one frame.
    ///
    /// Evaluates the projection switch against the controller's settled
    /// polar angle, performs at most one switch, then lets the controller
    /// integrate pending input into the active camera. Before switching, the
    /// outgoing camera is brought up to the controller's current placement.
    /// Returns `true` if the active camera switched or moved.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.disposed {
            return false;
        }

        let top_down = self.controls.polar_angle() <= self.switch_epsilon;
        let next = match (self.active, top_down) {
            (ProjectionKind::Perspective, true) => {
                Some(ProjectionKind::Orthographic)
            }
            (ProjectionKind::Orthographic, false) => {
                Some(ProjectionKind::Perspective)
            }
            _ => None,
        };

        if let Some(next) = next {
            let outgoing = camera_mut(
                self.active,
                &mut self.perspective,
                &mut self.orthographic,
            );
            let _ = self.controls.sync(outgoing);
            match next {
                ProjectionKind::Orthographic => self.switch_to_orthographic(),
                ProjectionKind::Perspective => self.switch_to_perspective(),
            }
        }

        let camera = camera_mut(
            self.active,
            &mut self.perspective,
            &mut self.orthographic,
        );
        let moved = self.controls.update(dt, camera);
        next.is_some() || moved
    }

    /// React to a viewport resize.
    ///
    /// Updates the perspective aspect ratio and re-derives the orthographic
    /// extents from it, so whichever camera is inactive is ready to take
    /// over at the new size. Zero-sized dimensions are ignored.
    pub fn update_frustum(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.perspective.aspect = width as f32 / height as f32;
        self.perspective.update_projection_matrix();
        self.update_orthographic_frustum();
        self.orthographic.update_projection_matrix();
        self.controls.set_viewport_size(width, height);
    }

    /// Frame the scene's bounding sphere under the active projection.
    ///
    /// Silently does nothing if the controller cannot fit to a sphere.
    pub fn fit_to_scene_bounding_sphere(
        &mut self,
        scene: &impl SceneBounds,
        animate: bool,
    ) {
        if self.disposed {
            return;
        }
        if !self.capabilities.fit_to_sphere {
            log::debug!("controller cannot fit to a sphere; ignoring request");
            return;
        }
        let camera =
            camera_ref(self.active, &self.perspective, &self.orthographic);
        frame_scene(
            &mut self.controls,
            camera,
            scene,
            self.default_fit_radius,
            animate,
        );
    }

    /// Orbit so the camera sits along `direction` from the pivot.
    ///
    /// Silently does nothing if the controller cannot rotate to an
    /// orientation or `direction` is zero.
    pub fn rotate_to(&mut self, direction: Vec3, animate: bool) {
        if self.disposed {
            return;
        }
        if !self.capabilities.rotate_to {
            log::debug!("controller cannot rotate to a direction; ignoring");
            return;
        }
        if direction.length_squared() == 0.0 {
            return;
        }
        let spherical = Spherical::from_vec3(direction);
        self.controls.rotate_to(spherical.theta, spherical.phi, animate);
    }

    /// Release the controller's input bindings. Later frames are ignored.
    pub fn dispose(&mut self) {
        self.controls.dispose();
        self.disposed = true;
    }

    /// Orthographic extents showing what the perspective camera shows at the
    /// current target distance.
    fn update_orthographic_frustum(&mut self) {
        let half_extents = matching_ortho_half_extents(
            self.perspective.fovy,
            self.perspective.aspect,
            self.controls.distance(),
        );
        self.orthographic.set_half_extents(half_extents);
    }

    /// Eye height that carries the orthographic zoom over to perspective.
    ///
    /// Orthographic zoom has no perspective equivalent, so it is folded into
    /// the height the perspective eye had before the switch. Only applies
    /// when leaving the top-down view at a steep angle, and only while the
    /// folded eye stays above the pivot.
    fn folded_height(&self, target: Vec3) -> Option<f32> {
        if self.controls.polar_angle() > ZOOM_FOLD_MAX_POLAR {
            return None;
        }
        let height = self.perspective.pose.eye.y / self.orthographic.zoom;
        (height.is_finite() && height > target.y).then_some(height)
    }

    fn switch_to_orthographic(&mut self) {
        self.orthographic.pose = self.perspective.pose;
        self.update_orthographic_frustum();
        self.orthographic.zoom = 1.0;
        self.orthographic.update_projection_matrix();
        self.active = ProjectionKind::Orthographic;
        self.controls.bind(CameraRef::Orthographic(&self.orthographic));
        log::debug!(
            "switched to orthographic (polar {:.4} rad, distance {:.3})",
            self.controls.polar_angle(),
            self.controls.distance()
        );
    }

    fn switch_to_perspective(&mut self) {
        let mut pose = self.orthographic.pose;
        if let Some(height) = self.folded_height(pose.target) {
            pose.eye.y = height;
        }
        self.perspective.pose = pose;
        self.perspective.update_projection_matrix();
        self.active = ProjectionKind::Perspective;
        self.controls.bind(CameraRef::Perspective(&self.perspective));
        log::debug!(
            "switched to perspective (polar {:.4} rad, zoom {:.3})",
            self.controls.polar_angle(),
            self.orthographic.zoom
        );
    }
}

fn camera_ref<'a>(
    kind: ProjectionKind,
    perspective: &'a PerspectiveCamera,
    orthographic: &'a OrthographicCamera,
) -> CameraRef<'a> {
    match kind {
        ProjectionKind::Perspective => CameraRef::Perspective(perspective),
        ProjectionKind::Orthographic => CameraRef::Orthographic(orthographic),
    }
}

fn camera_mut<'a>(
    kind: ProjectionKind,
    perspective: &'a mut PerspectiveCamera,
    orthographic: &'a mut OrthographicCamera,
) -> CameraMut<'a> {
    match kind {
        ProjectionKind::Perspective => CameraMut::Perspective(perspective),
        ProjectionKind::Orthographic => CameraMut::Orthographic(orthographic),
    }
}
