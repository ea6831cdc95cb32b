//! Input state management

use crate::event::{Action, InputEvent};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to its action. Everything but the arrow keys is ignored.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::ArrowLeft => Some(Action::MoveLeft),
        KeyCode::ArrowRight => Some(Action::MoveRight),
        _ => None,
    }
}

/// Translate a keyboard event. Keys without a known code, and keys with no
/// action, produce nothing.
pub fn input_event(key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let action = action_for_key(code)?;
    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(action),
        ElementState::Released => InputEvent::KeyUp(action),
    })
}

/// Held flags for the two movement actions.
///
/// Flags only mirror the most recent key-down/key-up seen; there is no
/// debouncing or press counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key event. `Quit` leaves the flags untouched.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(action) => self.set(action, true),
            InputEvent::KeyUp(action) => self.set(action, false),
            InputEvent::Quit => {}
        }
    }

    fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.move_left = held,
            Action::MoveRight => self.move_right = held,
        }
    }

    /// Is the move-left action held?
    pub fn move_left_held(&self) -> bool {
        self.move_left
    }

    /// Is the move-right action held?
    pub fn move_right_held(&self) -> bool {
        self.move_right
    }
}
