use glam::{Mat4, Vec2, Vec3};

/// Which of the two projections a camera slot holds.
///
/// Also serves as the handle consumers use to name the active camera of a
/// [`DualCamera`](super::dual::DualCamera).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Perspective projection (field of view + aspect ratio).
    Perspective,
    /// Orthographic projection (explicit extents + zoom).
    Orthographic,
}

/// World-space placement shared by both camera kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Pose at `eye` looking at `target` with +Y up.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit vector from the eye towards the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// Eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

/// Perspective camera defined by a pose and projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// World-space placement.
    pub pose: CameraPose,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Create a camera and compute its projection matrix.
    #[must_use]
    pub fn new(
        pose: CameraPose,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            pose,
            fovy,
            aspect,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the cached projection after changing parameters.
    pub fn update_projection_matrix(&mut self) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn horizontal_fov(&self) -> f32 {
        ((self.fovy.to_radians() * 0.5).tan() * self.aspect).atan() * 2.0
    }

    /// Visible world height at `distance` in front of the camera.
    #[must_use]
    pub fn frustum_height_at(&self, distance: f32) -> f32 {
        (self.fovy.to_radians() * 0.5).tan() * distance * 2.0
    }

    /// Visible world width at `distance` in front of the camera.
    #[must_use]
    pub fn frustum_width_at(&self, distance: f32) -> f32 {
        self.frustum_height_at(distance) * self.aspect
    }
}

/// Half-width and half-height an orthographic frustum needs to show what a
/// perspective camera with `fovy` degrees and `aspect` shows at `distance`.
#[must_use]
pub fn matching_ortho_half_extents(
    fovy: f32,
    aspect: f32,
    distance: f32,
) -> Vec2 {
    let half_height = distance * (fovy.to_radians() * 0.5).tan();
    Vec2::new(half_height * aspect, half_height)
}

/// Orthographic camera defined by a pose, frustum extents, and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// World-space placement.
    pub pose: CameraPose,
    /// Left frustum extent in view space.
    pub left: f32,
    /// Right frustum extent in view space.
    pub right: f32,
    /// Top frustum extent in view space.
    pub top: f32,
    /// Bottom frustum extent in view space.
    pub bottom: f32,
    /// Magnification applied around the extent center (1 = unscaled).
    pub zoom: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

impl OrthographicCamera {
    /// Create a camera and compute its projection matrix.
    #[must_use]
    pub fn new(
        pose: CameraPose,
        half_extents: Vec2,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            pose,
            left: -half_extents.x,
            right: half_extents.x,
            top: half_extents.y,
            bottom: -half_extents.y,
            zoom: 1.0,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Set symmetric extents around the view axis.
    pub fn set_half_extents(&mut self, half_extents: Vec2) {
        self.left = -half_extents.x;
        self.right = half_extents.x;
        self.top = half_extents.y;
        self.bottom = -half_extents.y;
    }

    /// Extents after zoom is applied: `(left, right, bottom, top)`.
    #[must_use]
    pub fn effective_extents(&self) -> (f32, f32, f32, f32) {
        let dx = (self.right - self.left) / (2.0 * self.zoom);
        let dy = (self.top - self.bottom) / (2.0 * self.zoom);
        let cx = (self.right + self.left) * 0.5;
        let cy = (self.top + self.bottom) * 0.5;
        (cx - dx, cx + dx, cy - dy, cy + dy)
    }

    /// Recompute the cached projection after changing parameters.
    pub fn update_projection_matrix(&mut self) {
        let (left, right, bottom, top) = self.effective_extents();
        self.projection = Mat4::orthographic_rh(
            left, right, bottom, top, self.znear, self.zfar,
        );
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

/// Shared borrow of either camera kind.
#[derive(Debug, Clone, Copy)]
pub enum CameraRef<'a> {
    /// A perspective camera.
    Perspective(&'a PerspectiveCamera),
    /// An orthographic camera.
    Orthographic(&'a OrthographicCamera),
}

impl CameraRef<'_> {
    /// Which projection this is.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective(_) => ProjectionKind::Perspective,
            Self::Orthographic(_) => ProjectionKind::Orthographic,
        }
    }

    /// The camera's pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        match self {
            Self::Perspective(c) => &c.pose,
            Self::Orthographic(c) => &c.pose,
        }
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        match self {
            Self::Perspective(c) => c.projection(),
            Self::Orthographic(c) => c.projection(),
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.pose().view_matrix()
    }
}

/// Exclusive borrow of either camera kind, handed to a controller for one
/// integration step.
#[derive(Debug)]
pub enum CameraMut<'a> {
    /// A perspective camera.
    Perspective(&'a mut PerspectiveCamera),
    /// An orthographic camera.
    Orthographic(&'a mut OrthographicCamera),
}

impl CameraMut<'_> {
    /// Which projection this is.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective(_) => ProjectionKind::Perspective,
            Self::Orthographic(_) => ProjectionKind::Orthographic,
        }
    }

    /// Reborrow as a shared reference.
    #[must_use]
    pub fn reborrow(&self) -> CameraRef<'_> {
        match self {
            Self::Perspective(c) => CameraRef::Perspective(c),
            Self::Orthographic(c) => CameraRef::Orthographic(c),
        }
    }

    /// Mutable access to the pose.
    pub fn pose_mut(&mut self) -> &mut CameraPose {
        match self {
            Self::Perspective(c) => &mut c.pose,
            Self::Orthographic(c) => &mut c.pose,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// 1.0 for orthographic, 0.0 for perspective.
    pub orthographic: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            orthographic: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: CameraRef<'_>) {
        let pose = camera.pose();
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = pose.eye.to_array();
        self.forward = pose.forward().to_array();
        self.orthographic = match camera.kind() {
            ProjectionKind::Perspective => 0.0,
            ProjectionKind::Orthographic => 1.0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> CameraPose {
        CameraPose::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }

    #[test]
    fn half_extents_match_perspective_frustum() {
        let cam = PerspectiveCamera::new(pose(), 70.0, 1.5, 0.1, 4000.0);
        let half = matching_ortho_half_extents(cam.fovy, cam.aspect, 10.0);
        assert!((half.y * 2.0 - cam.frustum_height_at(10.0)).abs() < 1e-5);
        assert!((half.x * 2.0 - cam.frustum_width_at(10.0)).abs() < 1e-5);
        assert_eq!(half.y, 10.0 * 35.0_f32.to_radians().tan());
        assert_eq!(half.x, half.y * 1.5);
    }

    #[test]
    fn zoom_shrinks_effective_extents() {
        let mut cam =
            OrthographicCamera::new(pose(), Vec2::new(4.0, 2.0), 0.1, 100.0);
        cam.zoom = 2.0;
        assert_eq!(cam.effective_extents(), (-2.0, 2.0, -1.0, 1.0));
    }

    #[test]
    fn ortho_projection_maps_extent_edge_to_ndc_edge() {
        let cam =
            OrthographicCamera::new(pose(), Vec2::new(4.0, 2.0), 0.1, 100.0);
        let clip = cam.projection() * glam::Vec4::new(4.0, 2.0, -5.0, 1.0);
        assert!((clip.x - 1.0).abs() < 1e-6);
        assert!((clip.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_flags_projection_kind() {
        let ortho =
            OrthographicCamera::new(pose(), Vec2::new(1.0, 1.0), 0.1, 100.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(CameraRef::Orthographic(&ortho));
        assert_eq!(uniform.orthographic, 1.0);
        assert_eq!(uniform.position, [0.0, 0.0, 10.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn uniforms_from_same_camera_compare_equal() {
        let cam = PerspectiveCamera::new(pose(), 70.0, 1.5, 0.1, 4000.0);
        let mut a = CameraUniform::new();
        let mut b = CameraUniform::new();
        a.update_view_proj(CameraRef::Perspective(&cam));
        assert_ne!(a, b);
        b.update_view_proj(CameraRef::Perspective(&cam));
        assert_eq!(a, b);
    }
}
