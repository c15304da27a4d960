//! Keyboard and pointer input mapping

use crate::components::Side;
use crate::map::Arena;

/// Keys that drive a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::W, Key::S, Key::Up, Key::Down];

    /// Map a toolkit key name to a paddle key
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "up" | "ArrowUp" => Some(Key::Up),
            "down" | "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    /// Paddle this key moves and the sign of its acceleration (+1 = up)
    pub fn binding(self) -> (Side, f32) {
        match self {
            Key::W => (Side::Left, 1.0),
            Key::S => (Side::Left, -1.0),
            Key::Up => (Side::Right, 1.0),
            Key::Down => (Side::Right, -1.0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which keys are physically held down.
///
/// Toolkits repeat key-down while a key is held; only the first one of a
/// press should accelerate the paddle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns false for auto-repeat of a held key.
    pub fn press(&mut self, key: Key) -> bool {
        let was_held = self.held[key.index()];
        self.held[key.index()] = true;
        !was_held
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Paddle a pointer at horizontal position `x` controls: left third moves
/// the left paddle, right third the right one, the middle nothing.
pub fn pointer_target(arena: &Arena, x: f32) -> Option<Side> {
    let third = arena.width / 3.0;
    if x < third {
        Some(Side::Left)
    } else if x > arena.width - third {
        Some(Side::Right)
    } else {
        None
    }
}
