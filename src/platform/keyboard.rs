//! Keyboard state tracking
//!
//! Key names follow the DOM `KeyboardEvent.key` convention ("ArrowLeft", "a", ...).
//! Each direction has two bindings (arrows and WASD) and stays held while either is down.

use crate::sim::{Direction, InputState};

/// Physical key group a direction key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Arrows,
    Wasd,
}

impl Binding {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            Binding::Arrows => 1 << 0,
            Binding::Wasd => 1 << 1,
        }
    }
}

/// A key the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction, Binding),
    Restart,
}

impl Key {
    /// Look up a key by its DOM name, case-insensitive for letters
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowUp" => Key::Move(Direction::Up, Binding::Arrows),
            "ArrowDown" => Key::Move(Direction::Down, Binding::Arrows),
            "ArrowLeft" => Key::Move(Direction::Left, Binding::Arrows),
            "ArrowRight" => Key::Move(Direction::Right, Binding::Arrows),
            "w" | "W" => Key::Move(Direction::Up, Binding::Wasd),
            "s" | "S" => Key::Move(Direction::Down, Binding::Wasd),
            "a" | "A" => Key::Move(Direction::Left, Binding::Wasd),
            "d" | "D" => Key::Move(Direction::Right, Binding::Wasd),
            "r" | "R" => Key::Restart,
            _ => return None,
        };
        Some(key)
    }
}

/// Live keyboard state, mutated by key events between ticks
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Per-direction bitmask of held bindings (Up, Down, Left, Right)
    held: [u8; 4],
    restart_requested: bool,
}

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press; returns the recognized key, if any
    ///
    /// Restart fires on every press, including auto-repeat.
    pub fn key_down(&mut self, name: &str) -> Option<Key> {
        let key = Key::from_name(name)?;
        match key {
            Key::Move(dir, binding) => self.held[slot(dir)] |= binding.bit(),
            Key::Restart => self.restart_requested = true,
        }
        Some(key)
    }

    /// Handle a key release
    pub fn key_up(&mut self, name: &str) {
        if let Some(Key::Move(dir, binding)) = Key::from_name(name) {
            self.held[slot(dir)] &= !binding.bit();
        }
    }

    /// Drop every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = [0; 4];
    }

    /// Copy of the directional state for one tick
    pub fn snapshot(&self) -> InputState {
        let mut input = InputState::IDLE;
        for dir in Direction::ALL {
            input.set(dir, self.held[slot(dir)] != 0);
        }
        input
    }

    /// Consume the pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_bindings_map_to_same_direction() {
        for (arrow, letter, dir) in [
            ("ArrowUp", "w", Direction::Up),
            ("ArrowDown", "s", Direction::Down),
            ("ArrowLeft", "a", Direction::Left),
            ("ArrowRight", "d", Direction::Right),
        ] {
            let mut kb = KeyboardState::new();
            kb.key_down(arrow);
            assert!(kb.snapshot().is_held(dir));

            let mut kb = KeyboardState::new();
            kb.key_down(letter);
            assert!(kb.snapshot().is_held(dir));
        }
    }

    #[test]
    fn test_direction_held_until_all_aliases_released() {
        let mut kb = KeyboardState::new();
        kb.key_down("ArrowLeft");
        kb.key_down("a");
        kb.key_up("ArrowLeft");
        assert!(kb.snapshot().left);

        kb.key_up("a");
        assert!(!kb.snapshot().left);
    }

    #[test]
    fn test_uppercase_letters() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.key_down("D"), Some(Key::Move(Direction::Right, Binding::Wasd)));
        kb.key_up("d");
        assert_eq!(kb.snapshot(), InputState::IDLE);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.key_down("Shift"), None);
        kb.key_up("Escape");
        assert_eq!(kb.snapshot(), InputState::IDLE);
        assert!(!kb.take_restart());
    }

    #[test]
    fn test_restart_is_edge_triggered() {
        let mut kb = KeyboardState::new();
        kb.key_down("R");
        assert!(kb.take_restart());
        assert!(!kb.take_restart());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut kb = KeyboardState::new();
        kb.key_down("ArrowUp");
        let snap = kb.snapshot();
        kb.key_up("ArrowUp");
        assert!(snap.up);
    }

    #[test]
    fn test_release_all() {
        let mut kb = KeyboardState::new();
        kb.key_down("w");
        kb.key_down("ArrowRight");
        kb.release_all();
        assert_eq!(kb.snapshot(), InputState::IDLE);
    }
}
