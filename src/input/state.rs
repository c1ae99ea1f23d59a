//! Per-tick input snapshot
//!
//! The loop polls the frontend once per tick and stores the result on the
//! camera, so everything a callback reads during a tick agrees.

use std::collections::HashSet;

use macroquad::math::Vec2;

use super::Key;

/// Keys held down during a tick
pub type KeySet = HashSet<Key>;

/// Mouse buttons we track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

/// Input as seen at the start of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Keys held down (Escape is never included; it ends the loop)
    pub keys: KeySet,
    /// Cursor position in viewport pixels
    pub mouse: Vec2,
    /// Left, right, middle
    pub buttons: [bool; 3],
}

impl InputState {
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn any_pressed(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[button as usize]
    }

    /// Whether any mouse button is held
    pub fn any_button_down(&self) -> bool {
        self.buttons.iter().any(|&b| b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        let mut state = InputState::default();
        assert!(!state.any_button_down());
        state.buttons[MouseButton::Middle as usize] = true;
        assert!(state.button_down(MouseButton::Middle));
        assert!(!state.button_down(MouseButton::Left));
        assert!(state.any_button_down());
    }

    #[test]
    fn test_keys() {
        let mut state = InputState::default();
        assert!(!state.any_pressed());
        state.keys.insert(Key::Space);
        assert!(state.is_pressed(Key::Space));
        assert!(!state.is_pressed(Key::A));
    }
}
