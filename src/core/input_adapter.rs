use winit::event::{DeviceEvent, ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{InputEvent, SECONDARY_BUTTON};

/// Adapter that turns winit events into [`InputEvent`]s
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Last cursor position (relative to window)
    cursor: Option<(f32, f32)>,
    /// Fingers on the screen in landing order
    touches: Vec<(u64, [f32; 2])>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events the gallery ignores.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Self::key_name(code).map(|key| InputEvent::Key {
                    key: key.to_string(),
                    pressed: event.state.is_pressed(),
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = Some((x, y));
                // Deltas come from raw device motion so they still flow
                // while the cursor is grabbed
                Some(InputEvent::MouseMove { x, y, dx: 0.0, dy: 0.0 })
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*state, *button),
            WindowEvent::Touch(touch) => self.touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
            ),
            WindowEvent::Resized(size) => Some(InputEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }

    /// Translate raw device motion into a look delta
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> Option<InputEvent> {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
                Some(InputEvent::MouseMove {
                    x,
                    y,
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    fn mouse_button(&self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => Some(InputEvent::Click { x, y }),
            (MouseButton::Right, ElementState::Pressed) => Some(InputEvent::MouseDown {
                x,
                y,
                button: SECONDARY_BUTTON,
            }),
            (MouseButton::Right, ElementState::Released) => Some(InputEvent::MouseUp {
                button: SECONDARY_BUTTON,
            }),
            _ => None,
        }
    }

    /// Track one finger and report the full touch list
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|(existing, _)| *existing != id);
                self.touches.push((id, [x, y]));
                Some(InputEvent::TouchStart { touches: self.touch_list() })
            }
            TouchPhase::Moved => {
                let (_, position) = self.touches.iter_mut().find(|(existing, _)| *existing == id)?;
                *position = [x, y];
                Some(InputEvent::TouchMove { touches: self.touch_list() })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let before = self.touches.len();
                self.touches.retain(|(existing, _)| *existing != id);
                (self.touches.len() != before).then(|| InputEvent::TouchEnd { touches: self.touch_list() })
            }
        }
    }

    fn touch_list(&self) -> Vec<[f32; 2]> {
        self.touches.iter().map(|(_, position)| *position).collect()
    }

    /// Map Winit KeyCode to a browser-style key name
    pub fn key_name(code: KeyCode) -> Option<&'static str> {
        match code {
            KeyCode::KeyW => Some("w"),
            KeyCode::KeyA => Some("a"),
            KeyCode::KeyS => Some("s"),
            KeyCode::KeyD => Some("d"),
            KeyCode::Escape => Some("Escape"),
            _ => None,
        }
    }
}
