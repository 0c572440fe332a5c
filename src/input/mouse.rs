use glam::Vec2;
use web_time::{Duration, Instant};

use super::event::MouseButton;

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Pointer travel in pixels after which a press counts as a drag.
const DRAG_THRESHOLD: f32 = 3.0;

/// Result of processing a mouse-up event through the click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag, mismatched up/down, or a button with no click meaning.
    NoAction,
    /// First primary click.
    SingleClick,
    /// Second primary click within the double-click window.
    DoubleClick,
    /// Secondary click without a drag (context-menu gesture).
    ContextClick,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    button: MouseButton,
    origin: Vec2,
    dragging: bool,
}

/// Tracks mouse position, drag state, and the double-click state machine.
pub(crate) struct InputState {
    pub(crate) mouse_pos: Vec2,
    press: Option<Press>,
    last_click_time: Option<Instant>,
    click_count: u32,
}

impl InputState {
    /// Create a new input state with no active click.
    pub(crate) fn new() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press: None,
            last_click_time: None,
            click_count: 0,
        }
    }

    /// Button currently held, if any.
    pub(crate) fn pressed_button(&self) -> Option<MouseButton> {
        self.press.map(|p| p.button)
    }

    /// Whether the held button has travelled far enough to be a drag.
    pub(crate) fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Record a button press at the current cursor position.
    pub(crate) fn handle_mouse_down(&mut self, button: MouseButton) {
        self.press = Some(Press {
            button,
            origin: self.mouse_pos,
            dragging: false,
        });
    }

    /// Update cursor position; returns the movement since the last update.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;
        if let Some(press) = &mut self.press {
            if pos.distance(press.origin) > DRAG_THRESHOLD {
                press.dragging = true;
            }
        }
        delta
    }

    /// Process a mouse-up event at `now` and return what kind of click
    /// happened.
    pub(crate) fn process_mouse_up(
        &mut self,
        button: MouseButton,
        now: Instant,
    ) -> ClickResult {
        let Some(press) = self.press.take() else {
            return ClickResult::NoAction;
        };

        if press.button != button || press.dragging {
            self.reset_clicks();
            return ClickResult::NoAction;
        }

        match button {
            MouseButton::Right => {
                self.reset_clicks();
                ClickResult::ContextClick
            }
            MouseButton::Middle => {
                self.reset_clicks();
                ClickResult::NoAction
            }
            MouseButton::Left => {
                let within_window = self.last_click_time.is_some_and(|last| {
                    now.duration_since(last) < DOUBLE_CLICK_THRESHOLD
                });
                self.click_count = if within_window {
                    self.click_count + 1
                } else {
                    1
                };
                self.last_click_time = Some(now);

                if self.click_count >= 2 {
                    // A third click starts a new pair
                    self.reset_clicks();
                    ClickResult::DoubleClick
                } else {
                    ClickResult::SingleClick
                }
            }
        }
    }

    fn reset_clicks(&mut self) {
        self.last_click_time = None;
        self.click_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(state: &mut InputState, button: MouseButton, at: Instant) -> ClickResult {
        state.handle_mouse_down(button);
        state.process_mouse_up(button, at)
    }

    #[test]
    fn two_quick_clicks_make_a_double_click() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        assert_eq!(click(&mut state, MouseButton::Left, t0), ClickResult::SingleClick);
        assert_eq!(
            click(&mut state, MouseButton::Left, t0 + Duration::from_millis(150)),
            ClickResult::DoubleClick
        );
        // Third click starts over
        assert_eq!(
            click(&mut state, MouseButton::Left, t0 + Duration::from_millis(300)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn slow_clicks_stay_single() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        let _ = click(&mut state, MouseButton::Left, t0);
        assert_eq!(
            click(&mut state, MouseButton::Left, t0 + Duration::from_millis(800)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut state = InputState::new();
        let _ = state.handle_mouse_position(10.0, 10.0);
        state.handle_mouse_down(MouseButton::Right);
        let _ = state.handle_mouse_position(40.0, 10.0);
        assert!(state.is_dragging());
        assert_eq!(
            state.process_mouse_up(MouseButton::Right, Instant::now()),
            ClickResult::NoAction
        );
        assert_eq!(state.pressed_button(), None);
    }

    #[test]
    fn small_jitter_still_counts_as_click() {
        let mut state = InputState::new();
        state.handle_mouse_down(MouseButton::Right);
        let _ = state.handle_mouse_position(1.0, 1.0);
        assert!(!state.is_dragging());
        assert_eq!(
            state.process_mouse_up(MouseButton::Right, Instant::now()),
            ClickResult::ContextClick
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::new();
        assert_eq!(
            state.process_mouse_up(MouseButton::Left, Instant::now()),
            ClickResult::NoAction
        );
    }
}
