//! Shared utilities for the viewport.

/// Frame time measurement and FPS smoothing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
