use web_time::{Duration, Instant};

/// Longest step handed to the camera. Longer gaps (window dragged, process
/// suspended) are clamped so damping doesn't teleport the view.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame timing with FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Duration of the last completed frame, in seconds
    last_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            last_delta: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a new frame and return the time step in seconds
    /// since the previous one, clamped to a tenth of a second.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32())
    }

    fn record(&mut self, frame_time: f32) -> f32 {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.last_delta = frame_time.clamp(0.0, MAX_FRAME_DELTA);
        self.last_delta
    }

    /// Time step returned by the last [`begin_frame`](Self::begin_frame).
    #[must_use]
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut timing = FrameTiming::new(60);
        assert_eq!(timing.record(2.5), MAX_FRAME_DELTA);
        assert_eq!(timing.last_delta(), MAX_FRAME_DELTA);
        assert!(timing.fps() < 60.0);
    }

    #[test]
    fn fps_tracks_steady_frames() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..500 {
            let _ = timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.5);
        assert!(timing.begin_frame() >= 0.0);
    }
}
