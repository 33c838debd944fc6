use serde::{Deserialize, Serialize};

/// Mouse button numbering follows the browser: 0 primary, 1 middle, 2 secondary
pub const SECONDARY_BUTTON: u8 = 2;

/// Platform-neutral input event.
///
/// Coordinates are client pixels with the origin at the top-left. Touch
/// events carry every finger still on the screen, in the order they landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Key {
        key: String,
        pressed: bool,
    },
    PointerLockChange {
        locked: bool,
    },
    MouseMove {
        x: f32,
        y: f32,
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    MouseDown {
        x: f32,
        y: f32,
        button: u8,
    },
    MouseUp {
        button: u8,
    },
    Click {
        x: f32,
        y: f32,
    },
    TouchStart {
        touches: Vec<[f32; 2]>,
    },
    TouchMove {
        touches: Vec<[f32; 2]>,
    },
    TouchEnd {
        touches: Vec<[f32; 2]>,
    },
    JoystickStart {
        x: f32,
        y: f32,
    },
    JoystickMove {
        x: f32,
        y: f32,
    },
    JoystickEnd,
    Resize {
        width: u32,
        height: u32,
    },
}
