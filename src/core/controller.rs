use serde::{Deserialize, Serialize};

/// Logical movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [MoveKey::Forward, MoveKey::Back, MoveKey::Left, MoveKey::Right];

    /// Map a browser-style key name (`"w"`, `"A"`, ...) to a move key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(MoveKey::Forward),
            "s" | "S" => Some(MoveKey::Back),
            "a" | "A" => Some(MoveKey::Left),
            "d" | "D" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// Held state of the four movement keys
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Back => self.back = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
    }

    pub fn is_down(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Back => self.back,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (forward, right) axes, each -1, 0 or 1. Opposite keys cancel.
    pub const fn axes(&self) -> (f32, f32) {
        (
            Self::to_direction(self.forward, self.back),
            Self::to_direction(self.right, self.left),
        )
    }
}
