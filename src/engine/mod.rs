//! The editor viewport: camera, scene, editor state and input wired together.
//!
//! [`EditorViewport`] is GPU-free so it can be driven headless from tests
//! and benchmarks. A host calls [`EditorViewport::frame`] once per frame and
//! renders with the returned [`RenderView`], which guarantees the camera
//! update (and any projection switch) happens before drawing.

/// The viewport's command vocabulary.
pub mod command;

use glam::{Mat4, Vec3};

pub use self::command::ViewportCommand;
use crate::camera::{
    CameraUniform, DualCamera, OrthographicCamera, PerspectiveCamera,
    ProjectionKind,
};
use crate::editor::EditorStore;
use crate::gizmo::{self, GizmoRequest, ViewCubeTarget};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::Scene;

/// What the renderer needs from one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// View-projection matrix of the active camera.
    pub view_projection: Mat4,
    /// Active camera position.
    pub eye: Vec3,
    /// Which camera is active.
    pub projection: ProjectionKind,
    /// Whether the camera moved or switched this frame.
    pub camera_moved: bool,
    /// GPU-ready camera data.
    pub uniform: CameraUniform,
}

/// Camera, scene, editor state and input processing for one viewport.
pub struct EditorViewport {
    options: Options,
    camera: DualCamera,
    store: EditorStore,
    scene: Scene,
    input: InputProcessor,
}

impl EditorViewport {
    /// Create a viewport showing the demo scene at `size` physical pixels.
    #[must_use]
    pub fn new(options: Options, size: (u32, u32)) -> Self {
        let camera = DualCamera::new(
            &options.camera,
            &options.controls,
            &options.scene_fit,
            size,
        );
        let store = EditorStore::default();
        let scene = Scene::demo(store.count(), &options.display);
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());
        log::debug!(
            "viewport created at {}x{} with {} objects",
            size.0,
            size.1,
            scene.objects().len()
        );
        Self {
            options,
            camera,
            store,
            scene,
            input,
        }
    }

    /// Apply one command.
    pub fn execute(&mut self, command: ViewportCommand) {
        match command {
            ViewportCommand::Camera(input) => self.camera.handle_input(input),
            ViewportCommand::FrameScene => {
                self.apply_gizmo_request(GizmoRequest::FrameScene {
                    animate: self.options.scene_fit.animate,
                });
            }
            ViewportCommand::ViewFrom(target) => self.click_view_cube(target),
            ViewportCommand::Increment => {
                let count = self.store.increment();
                self.scene.set_counter(count);
                log::debug!("counter incremented to {count}");
            }
            ViewportCommand::Decrement => {
                let count = self.store.decrement();
                self.scene.set_counter(count);
                log::debug!("counter decremented to {count}");
            }
        }
    }

    /// Run a raw input event through the input processor and execute the
    /// resulting commands.
    pub fn handle_event(&mut self, event: InputEvent) {
        for command in self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Execute the command bound to `key`. Returns `false` if unbound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Frame the scene and orbit to look from `target`.
    pub fn click_view_cube(&mut self, target: ViewCubeTarget) {
        for request in gizmo::click(target, self.options.scene_fit.animate) {
            self.apply_gizmo_request(request);
        }
    }

    /// Forward a gizmo request to the camera. Requests the controller
    /// cannot serve are dropped.
    pub fn apply_gizmo_request(&mut self, request: GizmoRequest) {
        match request {
            GizmoRequest::FrameScene { animate } => {
                self.camera.fit_to_scene_bounding_sphere(&self.scene, animate);
            }
            GizmoRequest::RotateTo { direction, animate } => {
                self.camera.rotate_to(direction, animate);
            }
        }
    }

    /// React to a window resize. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.update_frustum(width, height);
    }

    /// Advance the camera by `dt` seconds and describe the view to render.
    pub fn frame(&mut self, dt: f32) -> RenderView {
        let camera_moved = self.camera.update(dt);
        let current = self.camera.current();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(current);
        RenderView {
            view_projection: current.view_projection(),
            eye: current.pose().eye,
            projection: current.kind(),
            camera_moved,
            uniform,
        }
    }

    /// Release the camera controller. Later frames leave the view as is.
    pub fn dispose(&mut self) {
        self.camera.dispose();
    }

    /// The camera pair.
    #[must_use]
    pub fn camera(&self) -> &DualCamera {
        &self.camera
    }

    /// Mutable access to the camera pair.
    pub fn camera_mut(&mut self) -> &mut DualCamera {
        &mut self.camera
    }

    /// The perspective camera, active or not.
    #[must_use]
    pub fn perspective(&self) -> &PerspectiveCamera {
        self.camera.perspective()
    }

    /// The orthographic camera, active or not.
    #[must_use]
    pub fn orthographic(&self) -> &OrthographicCamera {
        self.camera.orthographic()
    }

    /// Scene content.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to scene content.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Editor state.
    #[must_use]
    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    /// Options the viewport was created with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable access to the input processor.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }
}
