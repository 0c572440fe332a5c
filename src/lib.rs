// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! 3D viewport editor shell with a perspective/orthographic dual camera.
//!
//! Dualview keeps a perspective and an orthographic camera on one
//! viewpoint. While the view looks straight down the orthographic camera
//! takes over; orbiting away hands control back to the perspective camera
//! without a visible jump.
//!
//! # Key entry points
//!
//! - [`camera::DualCamera`] - the camera pair and its switch logic
//! - [`camera::OrbitControls`] - damped orbit/pan/dolly controller
//! - [`engine::EditorViewport`] - camera, scene, editor state and input
//!   wired together, GPU-free
//! - [`renderer::SceneRenderer`] - wgpu renderer for the box scene
//! - [`options::Options`] - runtime configuration (camera, controls,
//!   framing, display, key bindings)
//!
//! # Frame order
//!
//! A host calls [`engine::EditorViewport::frame`] once per frame before
//! drawing. The camera controller integrates and the projection switch is
//! evaluated there, so the returned [`engine::RenderView`] always describes
//! the camera that should be drawn with.

pub mod camera;
pub mod editor;
pub mod engine;
pub mod error;
pub mod gizmo;
pub mod gpu;
pub mod input;
pub mod math;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{DualCamera, OrbitControls, ProjectionKind, ViewControls};
pub use engine::{EditorViewport, RenderView, ViewportCommand};
pub use error::DualviewError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
