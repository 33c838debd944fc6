use log::debug;

use crate::camera::{CameraPose, FirstPersonController};
use crate::config::{Config, SingleTouchMode};
use crate::core::event::{InputEvent, SECONDARY_BUTTON};
use crate::core::gesture::GestureKind;
use crate::gallery::{Gallery, Hit};
use crate::projection::SceneCamera;

/// Controller, camera and targets wired to one input stream.
///
/// Input handlers run between frames; [`ShootingGallery::frame`] advances
/// the controller and writes the pose into the camera.
#[derive(Debug)]
pub struct ShootingGallery {
    controller: FirstPersonController,
    camera: SceneCamera,
    gallery: Gallery,
    pointer_lock_enabled: bool,
    pointer_locked: bool,
    frames: u64,
    shots_fired: u32,
}

impl ShootingGallery {
    pub fn new(config: Config) -> Self {
        let controller = FirstPersonController::new(config.controller);
        let mut camera = SceneCamera::new(&config.camera);
        controller.pose().apply_to(&mut camera);

        Self {
            controller,
            camera,
            gallery: Gallery::new(config.gallery),
            pointer_lock_enabled: config.pointer_lock,
            pointer_locked: false,
            frames: 0,
            shots_fired: 0,
        }
    }

    pub fn controller(&self) -> &FirstPersonController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FirstPersonController {
        &mut self.controller
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Route one input event. Returns the hit when the event fired a shot
    /// that struck a target.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Hit> {
        match event {
            InputEvent::Key { key, pressed } => {
                if key == "Escape" && *pressed {
                    self.set_pointer_lock(false);
                } else {
                    self.controller.handle_key(key, *pressed);
                }
            }
            InputEvent::PointerLockChange { locked } => self.set_pointer_lock(*locked),
            InputEvent::MouseMove { x, y, dx, dy } => {
                if self.pointer_locked {
                    let sensitivity = self.controller.config().mouse_sensitivity;
                    self.controller.on_look_delta(*dx, *dy, sensitivity);
                } else {
                    self.controller.update_drag(GestureKind::MouseLook, *x, *y);
                }
            }
            InputEvent::MouseDown { x, y, button } if *button == SECONDARY_BUTTON => {
                self.controller.begin_drag(GestureKind::MouseLook, *x, *y);
            }
            InputEvent::MouseUp { button } if *button == SECONDARY_BUTTON => {
                self.controller.end_drag(GestureKind::MouseLook);
            }
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => {}
            InputEvent::Click { x, y } => {
                // The lock request lands after this click, so the shot still
                // goes through the clicked point
                let hit = self.fire(*x, *y);
                if self.pointer_lock_enabled && !self.pointer_locked {
                    self.set_pointer_lock(true);
                }
                return hit;
            }
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [first] => {
                    let kind = self.single_touch_kind();
                    self.controller.begin_drag(kind, first[0], first[1]);
                }
                [_, second, ..] => {
                    self.controller.begin_drag(GestureKind::TwoTouchLook, second[0], second[1]);
                }
                [] => {}
            },
            InputEvent::TouchMove { touches } => match touches.as_slice() {
                [first] => {
                    let kind = self.single_touch_kind();
                    self.controller.update_drag(kind, first[0], first[1]);
                }
                [_, second, ..] => {
                    self.controller.update_drag(GestureKind::TwoTouchLook, second[0], second[1]);
                }
                [] => {}
            },
            InputEvent::TouchEnd { touches } => {
                let kind = self.single_touch_kind();
                self.controller.end_drag(kind);
                if touches.len() < 2 {
                    self.controller.end_drag(GestureKind::TwoTouchLook);
                }
            }
            InputEvent::JoystickStart { x, y } => self.controller.begin_drag(GestureKind::Joystick, *x, *y),
            InputEvent::JoystickMove { x, y } => self.controller.update_drag(GestureKind::Joystick, *x, *y),
            InputEvent::JoystickEnd => self.controller.end_drag(GestureKind::Joystick),
            InputEvent::Resize { width, height } => self.camera.resize(*width, *height),
        }
        None
    }

    /// Shoot from the camera. Through the crosshair while pointer-locked,
    /// otherwise through the clicked client point.
    pub fn fire(&mut self, x: f32, y: f32) -> Option<Hit> {
        self.shots_fired += 1;
        let ray = if self.pointer_locked {
            self.camera.center_ray()
        } else {
            self.camera.screen_ray(x, y)
        };
        self.gallery.shoot(&ray)
    }

    /// Advance one render frame
    pub fn frame(&mut self, dt: f32) -> CameraPose {
        let pose = self.controller.tick(dt);
        pose.apply_to(&mut self.camera);
        self.frames += 1;
        pose
    }

    fn set_pointer_lock(&mut self, locked: bool) {
        if self.pointer_locked != locked {
            debug!("pointer lock {}", if locked { "engaged" } else { "released" });
        }
        self.pointer_locked = locked;
    }

    fn single_touch_kind(&self) -> GestureKind {
        match self.controller.config().single_touch {
            SingleTouchMode::Move => GestureKind::TouchMove,
            SingleTouchMode::Look => GestureKind::TouchLook,
        }
    }
}

impl Default for ShootingGallery {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
