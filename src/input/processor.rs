//! Converts raw platform events into viewport commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! drag detection, double-click timing, modifier keys) and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! viewport's [`execute`](crate::engine::EditorViewport::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::camera::{ControlInput, DragAction};
use crate::engine::ViewportCommand;
use crate::gizmo::{CubeFace, ViewCubeTarget};

/// Dolly notches per pixel of vertical middle-button drag.
const DRAG_DOLLY_PER_PIXEL: f32 = 0.05;

/// Dolly notches per unit of pinch magnification. A pinch that doubles the
/// magnification roughly halves the distance.
const PINCH_DOLLY_SCALE: f32 = 13.5;

/// Maps physical key strings to [`ViewportCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyF"`, `"Numpad7"`, `"Equal"`, etc.
///
/// Only *discrete* commands make sense as key bindings; camera gestures
/// are produced by the mouse interpreter, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewportCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Frame the whole scene.
    FrameScene,
    /// Look from the front (+Z).
    ViewFront,
    /// Look from the right (+X).
    ViewRight,
    /// Look straight down (+Y).
    ViewTop,
    /// Look straight up (-Y).
    ViewBottom,
    /// Step the counter up.
    Increment,
    /// Step the counter down.
    Decrement,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewportCommand`].
    fn to_command(self) -> ViewportCommand {
        let view = |face| ViewportCommand::ViewFrom(ViewCubeTarget::face(face));
        match self {
            Self::FrameScene => ViewportCommand::FrameScene,
            Self::ViewFront => view(CubeFace::Front),
            Self::ViewRight => view(CubeFace::Right),
            Self::ViewTop => view(CubeFace::Top),
            Self::ViewBottom => view(CubeFace::Bottom),
            Self::Increment => ViewportCommand::Increment,
            Self::Decrement => ViewportCommand::Decrement,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyF".into(), KeyCommandTag::FrameScene),
            ("Numpad1".into(), KeyCommandTag::ViewFront),
            ("Numpad3".into(), KeyCommandTag::ViewRight),
            ("Numpad7".into(), KeyCommandTag::ViewTop),
            ("Numpad9".into(), KeyCommandTag::ViewBottom),
            ("Equal".into(), KeyCommandTag::Increment),
            ("Minus".into(), KeyCommandTag::Decrement),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewportCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewportCommand`]s.
///
/// Owns all transient input state (mouse position, drag detection,
/// double-click timing, modifier keys) and the keyboard binding map.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event) {
///     viewport.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyF") {
///     viewport.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Mouse tracking and double-click state machine.
    state: InputState,
    /// Gesture of the held button, if it drives the camera.
    drag: Option<DragAction>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            drag: None,
            shift_pressed: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.state.mouse_pos
    }

    /// Gesture the held button is performing, if any.
    #[must_use]
    pub fn drag(&self) -> Option<DragAction> {
        self.drag
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewportCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return the commands it produces.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<ViewportCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// [`handle_event`](Self::handle_event) with an explicit timestamp for
    /// double-click detection.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Vec<ViewportCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y).into_iter().collect()
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, now)
            }
            InputEvent::Scroll { delta } => {
                vec![camera(ControlInput::Dolly { amount: delta })]
            }
            InputEvent::Pinch { delta } => vec![camera(ControlInput::Dolly {
                amount: delta * PINCH_DOLLY_SCALE,
            })],
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera gesture.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewportCommand> {
        let delta = self.state.handle_mouse_position(x, y);
        if delta == Vec2::ZERO {
            return None;
        }
        let input = match self.drag? {
            DragAction::Rotate => ControlInput::Rotate { delta },
            DragAction::Pan => ControlInput::Pan { delta },
            DragAction::Dolly => ControlInput::Dolly {
                amount: -delta.y * DRAG_DOLLY_PER_PIXEL,
            },
        };
        Some(camera(input))
    }

    /// Button press/release: start or end a drag, produce click commands
    /// on release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        now: Instant,
    ) -> Vec<ViewportCommand> {
        if pressed {
            if self.state.pressed_button().is_some() {
                // Chorded press: keep the gesture already in progress
                return Vec::new();
            }
            self.state.handle_mouse_down(button);
            let action = self.drag_action(button);
            self.drag = Some(action);
            return vec![camera(ControlInput::BeginDrag(action))];
        }

        if self.state.pressed_button() != Some(button) {
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(2);
        if self.drag.take().is_some() {
            commands.push(camera(ControlInput::EndDrag));
        }
        match self.state.process_mouse_up(button, now) {
            ClickResult::DoubleClick => commands.push(ViewportCommand::Increment),
            ClickResult::ContextClick => commands.push(ViewportCommand::Decrement),
            ClickResult::SingleClick | ClickResult::NoAction => {}
        }
        commands
    }

    fn drag_action(&self, button: MouseButton) -> DragAction {
        match button {
            MouseButton::Left if self.shift_pressed => DragAction::Pan,
            MouseButton::Left => DragAction::Rotate,
            MouseButton::Right => DragAction::Pan,
            MouseButton::Middle => DragAction::Dolly,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn camera(input: ControlInput) -> ViewportCommand {
    ViewportCommand::Camera(input)
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    #[test]
    fn left_drag_orbits() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        assert_eq!(
            input.handle_event(press(MouseButton::Left)),
            vec![camera(ControlInput::BeginDrag(DragAction::Rotate))]
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 30.0, y: 5.0 }),
            vec![camera(ControlInput::Rotate {
                delta: Vec2::new(20.0, -5.0)
            })]
        );
        assert_eq!(
            input.handle_event(release(MouseButton::Left)),
            vec![camera(ControlInput::EndDrag)]
        );
        assert_eq!(input.drag(), None);
    }

    #[test]
    fn shift_left_and_right_drag_pan() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true });
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(input.drag(), Some(DragAction::Pan));
        let _ = input.handle_event(release(MouseButton::Left));

        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: false });
        let _ = input.handle_event(press(MouseButton::Right));
        assert_eq!(input.drag(), Some(DragAction::Pan));
    }

    #[test]
    fn middle_drag_up_dollies_in() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Middle));
        let commands =
            input.handle_event(InputEvent::CursorMoved { x: 0.0, y: -20.0 });
        assert_eq!(
            commands,
            vec![camera(ControlInput::Dolly { amount: 1.0 })]
        );
    }

    #[test]
    fn cursor_motion_without_button_is_ignored() {
        let mut input = InputProcessor::new();
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 })
            .is_empty());
    }

    #[test]
    fn wheel_and_pinch_dolly() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -2.0 }),
            vec![camera(ControlInput::Dolly { amount: -2.0 })]
        );
        let pinch = input.handle_event(InputEvent::Pinch { delta: 0.1 });
        assert!(matches!(
            pinch.as_slice(),
            [ViewportCommand::Camera(ControlInput::Dolly { amount })] if *amount > 0.0
        ));
    }

    #[test]
    fn double_click_increments() {
        let mut input = InputProcessor::new();
        let t0 = Instant::now();
        let _ = input.handle_event_at(press(MouseButton::Left), t0);
        let first = input.handle_event_at(release(MouseButton::Left), t0);
        assert!(!first.contains(&ViewportCommand::Increment));

        let t1 = t0 + Duration::from_millis(200);
        let _ = input.handle_event_at(press(MouseButton::Left), t1);
        let second = input.handle_event_at(release(MouseButton::Left), t1);
        assert_eq!(
            second,
            vec![camera(ControlInput::EndDrag), ViewportCommand::Increment]
        );
    }

    #[test]
    fn right_click_decrements_but_right_drag_does_not() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(input
            .handle_event(release(MouseButton::Right))
            .contains(&ViewportCommand::Decrement));

        let _ = input.handle_event(press(MouseButton::Right));
        let _ = input.handle_event(InputEvent::CursorMoved { x: 80.0, y: 0.0 });
        assert!(!input
            .handle_event(release(MouseButton::Right))
            .contains(&ViewportCommand::Decrement));
    }

    #[test]
    fn chorded_buttons_keep_first_gesture() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        assert!(input.handle_event(press(MouseButton::Right)).is_empty());
        assert!(input.handle_event(release(MouseButton::Right)).is_empty());
        assert_eq!(input.drag(), Some(DragAction::Rotate));
    }

    #[test]
    fn default_keys_map_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("Numpad7"),
            Some(ViewportCommand::ViewFrom(ViewCubeTarget::face(CubeFace::Top)))
        );
        assert_eq!(
            input.handle_key_press("Minus"),
            Some(ViewportCommand::Decrement)
        );
        assert_eq!(input.handle_key_press("KeyQ"), None);
    }

    #[test]
    fn rebinding_a_key() {
        let mut input = InputProcessor::new();
        input.key_bindings_mut().bind("KeyH", KeyCommandTag::FrameScene);
        assert_eq!(
            input.handle_key_press("KeyH"),
            Some(ViewportCommand::FrameScene)
        );
    }
}
