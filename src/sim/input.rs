//! Keyboard events to ship control intent
//!
//! Hosts deliver discrete key events; the tick only ever reads the resulting
//! [`ControlIntent`]. Last write wins.

use serde::{Deserialize, Serialize};

/// Desired ship action for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub thrusting: bool,
    /// Radians per tick (positive turns left / counter-clockwise on screen)
    pub rotation_rate: f32,
}

/// Keys the ship responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl ControlIntent {
    /// Apply a key event. `turn_rate` is the per-tick turn in radians.
    pub fn apply(&mut self, event: KeyEvent, turn_rate: f32) {
        match event {
            KeyEvent::Down(Key::Left) => self.rotation_rate = turn_rate,
            KeyEvent::Down(Key::Right) => self.rotation_rate = -turn_rate,
            KeyEvent::Down(Key::Up) => self.thrusting = true,
            // Releasing either turn key stops the turn, even if the other is held
            KeyEvent::Up(Key::Left | Key::Right) => self.rotation_rate = 0.0,
            KeyEvent::Up(Key::Up) => self.thrusting = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f32 = 0.2;

    #[test]
    fn test_turn_keys() {
        let mut intent = ControlIntent::default();
        intent.apply(KeyEvent::Down(Key::Left), RATE);
        assert_eq!(intent.rotation_rate, RATE);
        intent.apply(KeyEvent::Down(Key::Right), RATE);
        assert_eq!(intent.rotation_rate, -RATE);
        intent.apply(KeyEvent::Up(Key::Left), RATE);
        assert_eq!(intent.rotation_rate, 0.0);
        assert!(!intent.thrusting);
    }

    #[test]
    fn test_thrust_key() {
        let mut intent = ControlIntent::default();
        intent.apply(KeyEvent::Down(Key::Up), RATE);
        assert!(intent.thrusting);
        assert_eq!(intent.rotation_rate, 0.0);
        intent.apply(KeyEvent::Up(Key::Up), RATE);
        assert!(!intent.thrusting);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_code("ArrowDown"), None);
        assert_eq!(Key::from_code("Space"), None);
    }
}
