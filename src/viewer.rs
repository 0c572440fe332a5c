//! Standalone editor window backed by winit.
//!
//! ```no_run
//! # use dualview::Viewer;
//! Viewer::builder()
//!     .with_title("Boxes")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::EditorViewport,
    error::DualviewError,
    gpu::render_context::RenderContext,
    input::{InputEvent, MouseButton},
    options::Options,
    renderer::SceneRenderer,
    util::FrameTiming,
};

/// Frame cap for the standalone window.
const TARGET_FPS: u32 = 120;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with the default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Dualview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the editor viewport.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`DualviewError::Viewer`] if the event loop cannot be
    /// created or exits abnormally, and [`DualviewError::Gpu`] if the GPU
    /// context could not be initialized.
    pub fn run(self) -> Result<(), DualviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| DualviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            host: None,
            options: self.options,
            title: self.title,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DualviewError::Viewer(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Host ─────────────────────────────────────────────────────────────────

/// GPU state and the viewport it draws.
struct Host {
    context: RenderContext,
    renderer: SceneRenderer,
    viewport: EditorViewport,
    timing: FrameTiming,
}

impl Host {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.viewport.resize(width, height);
    }

    /// Advance the camera, then draw with whichever camera is now active.
    fn redraw(&mut self) {
        if !self.timing.should_render() {
            return;
        }
        let dt = self.timing.begin_frame();
        let view = self.viewport.frame(dt);
        match self
            .renderer
            .render(&self.context, &view, self.viewport.scene())
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                self.context.reconfigure();
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    host: Option<Host>,
    options: Options,
    title: String,
    init_error: Option<DualviewError>,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.init_error = Some(DualviewError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let context =
            match pollster::block_on(RenderContext::new(window.clone(), size)) {
                Ok(context) => context,
                Err(e) => {
                    log::error!("Failed to initialize GPU: {e}");
                    self.init_error = Some(e.into());
                    event_loop.exit();
                    return;
                }
            };

        let renderer = SceneRenderer::new(&context, &self.options.display);
        let viewport = EditorViewport::new(self.options.clone(), size);
        log::info!("viewer started at {}x{}", size.0, size.1);

        window.request_redraw();
        self.window = Some(window);
        self.host = Some(Host {
            context,
            renderer,
            viewport,
            timing: FrameTiming::new(TARGET_FPS),
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(host) = &mut self.host {
                host.viewport.dispose();
            }
            event_loop.exit();
            return;
        }

        let (Some(window), Some(host)) = (&self.window, &mut self.host) else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (w, h) = viewport_size(event_size);
                host.resize(w, h);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let (w, h) = viewport_size(window.inner_size());
                host.resize(w, h);
            }

            WindowEvent::RedrawRequested => {
                host.redraw();
                window.request_redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                host.viewport.handle_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                host.viewport.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                host.viewport.handle_event(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::PinchGesture { delta, .. } => {
                host.viewport.handle_event(InputEvent::Pinch {
                    delta: delta as f32,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                host.viewport.handle_event(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if !host.viewport.handle_key_press(&key_str) {
                    log::trace!("unbound key {key_str}");
                }
            }

            _ => (),
        }
    }
}
