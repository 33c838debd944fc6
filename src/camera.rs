use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use log::{debug, trace};

use crate::config::{ControllerConfig, MoveModel};
use crate::core::controller::{MoveKey, MovementState};
use crate::core::gesture::{GestureKind, GestureSet};
use crate::traits::CameraRig;

/// Pitch is clamped to straight up / straight down
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Unit look direction flattened onto the ground plane.
///
/// Equal to zeroing the vertical component of the full look vector and
/// renormalizing, but stays defined when pitch is exactly ±π/2.
pub fn horizontal_forward(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Orientation and position produced by one controller tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub yaw: f32,
    pub pitch: f32,
    pub position: Vec3,
    /// Horizontal movement basis
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraPose {
    pub fn new(yaw: f32, pitch: f32, position: Vec3) -> Self {
        let forward = horizontal_forward(yaw);
        Self {
            yaw,
            pitch,
            position,
            forward,
            right: forward.cross(Vec3::Y).normalize(),
        }
    }

    /// Yaw about world up, then pitch about local right (YXZ order)
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Full look direction including pitch
    pub fn look_direction(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn apply_to<R: CameraRig + ?Sized>(&self, rig: &mut R) {
        rig.set_orientation(self.yaw, self.pitch);
        rig.set_position(self.position);
    }
}

/// First-person look and walk controller.
///
/// Owns yaw, pitch and position. Input handlers mutate orientation and
/// gesture state; [`FirstPersonController::tick`] turns held keys and drag
/// offsets into movement once per frame.
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    yaw: f32,
    pitch: f32,
    position: Vec3,
    movement: MovementState,
    gestures: GestureSet,
    config: ControllerConfig,
}

impl FirstPersonController {
    pub fn new(config: ControllerConfig) -> Self {
        let mut controller = Self {
            yaw: config.start_yaw,
            pitch: config.start_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            position: config.start_position,
            movement: MovementState::default(),
            gestures: GestureSet::new(),
            config,
        };
        if let Some(boundary) = controller.config.boundary {
            controller.position = boundary.clamp(controller.position);
        }
        controller
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport. Not clamped until the next tick.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    pub fn gestures(&self) -> &GestureSet {
        &self.gestures
    }

    /// Rotate by a pointer delta. Positive dx turns right, positive dy looks down.
    pub fn on_look_delta(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn set_move_key(&mut self, key: MoveKey, pressed: bool) {
        self.movement.set(key, pressed);
    }

    /// Key event by name. Returns false for keys that do not move.
    pub fn handle_key(&mut self, name: &str, pressed: bool) -> bool {
        match MoveKey::from_key_name(name) {
            Some(key) => {
                self.set_move_key(key, pressed);
                true
            }
            None => false,
        }
    }

    pub fn begin_drag(&mut self, kind: GestureKind, x: f32, y: f32) {
        debug!("begin {kind:?} at ({x}, {y})");
        self.gestures.begin(kind, Vec2::new(x, y));
    }

    pub fn update_drag(&mut self, kind: GestureKind, x: f32, y: f32) {
        let Some(delta) = self.gestures.update(kind, Vec2::new(x, y)) else {
            return;
        };
        if kind.is_look() {
            self.on_look_delta(delta.x, delta.y, self.look_sensitivity(kind));
        }
    }

    pub fn end_drag(&mut self, kind: GestureKind) {
        if self.gestures.end(kind) {
            debug!("end {kind:?}");
        }
    }

    fn look_sensitivity(&self, kind: GestureKind) -> f32 {
        match kind {
            GestureKind::MouseLook => self.config.mouse_sensitivity,
            _ => self.config.touch_sensitivity,
        }
    }

    pub fn forward(&self) -> Vec3 {
        horizontal_forward(self.yaw)
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Movement the next tick would apply, before clamping
    pub fn displacement(&self, dt: f32) -> Vec3 {
        let forward = self.forward();
        let right = self.right();
        let cfg = &self.config;

        let (fwd_axis, right_axis) = self.movement.axes();
        let mut delta = forward * fwd_axis * cfg.move_speed + right * right_axis * cfg.move_speed;

        // Drag offset is used as-is: dragging down walks forward
        let touch = self.gestures.offset(GestureKind::TouchMove);
        delta += right * touch.x * cfg.touch_move_speed + forward * touch.y * cfg.touch_move_speed;

        let stick = self.joystick_deflection();
        delta += right * stick.x * cfg.joystick_speed - forward * stick.y * cfg.joystick_speed;

        match cfg.move_model {
            MoveModel::PerFrame => delta,
            MoveModel::PerSecond => delta * dt,
        }
    }

    /// Joystick offset scaled to the unit disc, screen-down positive
    fn joystick_deflection(&self) -> Vec2 {
        let radius = self.config.joystick_radius;
        if radius <= 0.0 {
            return Vec2::ZERO;
        }
        (self.gestures.offset(GestureKind::Joystick) / radius).clamp_length_max(1.0)
    }

    /// Advance one frame and return the resulting pose
    pub fn tick(&mut self, dt: f32) -> CameraPose {
        self.position += self.displacement(dt);
        if let Some(boundary) = self.config.boundary {
            self.position = boundary.clamp(self.position);
        }
        trace!("tick dt={dt:.4} pos={:?} yaw={:.3} pitch={:.3}", self.position, self.yaw, self.pitch);
        self.pose()
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.yaw, self.pitch, self.position)
    }
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Boundary;

    const EPSILON: f32 = 1e-5;

    fn unbounded() -> FirstPersonController {
        FirstPersonController::new(ControllerConfig {
            boundary: None,
            start_position: Vec3::ZERO,
            ..Default::default()
        })
    }

    #[test]
    fn test_look_delta_signs() {
        let mut c = unbounded();
        c.on_look_delta(10.0, 5.0, 0.01);
        assert!((c.yaw() + 0.1).abs() < EPSILON);
        assert!((c.pitch() + 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut c = unbounded();
        c.on_look_delta(0.0, -10_000.0, 0.01);
        assert_eq!(c.pitch(), PITCH_LIMIT);
        c.on_look_delta(0.0, 20_000.0, 0.01);
        assert_eq!(c.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_start_pitch_clamped() {
        let c = FirstPersonController::new(ControllerConfig {
            start_pitch: 3.0,
            ..Default::default()
        });
        assert_eq!(c.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_basis_at_zero_yaw() {
        let c = unbounded();
        assert!(c.forward().abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!(c.right().abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn test_look_direction_matches_forward_when_level() {
        let mut c = unbounded();
        c.on_look_delta(123.0, 0.0, 0.01);
        let pose = c.pose();
        assert!(pose.look_direction().abs_diff_eq(pose.forward, EPSILON));
    }

    #[test]
    fn test_look_direction_pitched_up() {
        let mut c = unbounded();
        c.on_look_delta(0.0, -100.0, 0.005);
        let look = c.pose().look_direction();
        assert!(look.y > 0.0);
        assert!((look.y - 0.5_f32.sin()).abs() < EPSILON);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut c = unbounded();
        c.set_move_key(MoveKey::Forward, true);
        c.set_move_key(MoveKey::Back, true);
        assert_eq!(c.tick(0.016).position, Vec3::ZERO);
    }

    #[test]
    fn test_strafe_right() {
        let mut c = unbounded();
        c.handle_key("d", true);
        let pose = c.tick(0.016);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.15, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_handle_key_unknown() {
        let mut c = unbounded();
        assert!(!c.handle_key("Shift", true));
        assert!(!c.movement().any());
    }

    #[test]
    fn test_touch_move_offset() {
        let mut c = unbounded();
        c.begin_drag(GestureKind::TouchMove, 100.0, 100.0);
        c.update_drag(GestureKind::TouchMove, 150.0, 100.0);
        let pose = c.tick(0.016);
        // 50px * 0.002 to the right
        assert!(pose.position.abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_touch_move_does_not_rotate() {
        let mut c = unbounded();
        c.begin_drag(GestureKind::TouchMove, 0.0, 0.0);
        c.update_drag(GestureKind::TouchMove, 40.0, 40.0);
        assert_eq!(c.yaw(), 0.0);
        assert_eq!(c.pitch(), 0.0);
    }

    #[test]
    fn test_joystick_full_deflection_forward() {
        let mut c = unbounded();
        c.begin_drag(GestureKind::Joystick, 200.0, 200.0);
        // Pushed up well past the radius
        c.update_drag(GestureKind::Joystick, 200.0, 0.0);
        let pose = c.tick(0.016);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -0.15), EPSILON));
    }

    #[test]
    fn test_joystick_zero_radius_ignored() {
        let mut c = FirstPersonController::new(ControllerConfig {
            joystick_radius: 0.0,
            boundary: None,
            start_position: Vec3::ZERO,
            ..Default::default()
        });
        c.begin_drag(GestureKind::Joystick, 0.0, 0.0);
        c.update_drag(GestureKind::Joystick, 10.0, 0.0);
        assert_eq!(c.tick(0.016).position, Vec3::ZERO);
    }

    #[test]
    fn test_per_second_scales_by_dt() {
        let mut c = FirstPersonController::new(ControllerConfig {
            move_model: MoveModel::PerSecond,
            move_speed: 2.0,
            boundary: None,
            start_position: Vec3::ZERO,
            ..Default::default()
        });
        c.set_move_key(MoveKey::Forward, true);
        let pose = c.tick(0.5);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));
    }

    #[test]
    fn test_start_position_clamped() {
        let c = FirstPersonController::new(ControllerConfig {
            start_position: Vec3::new(50.0, 1.6, 0.0),
            boundary: Some(Boundary::square(9.5)),
            ..Default::default()
        });
        assert_eq!(c.position().x, 9.5);
    }

    struct RecordingRig {
        orientation: (f32, f32),
        position: Vec3,
    }

    impl CameraRig for RecordingRig {
        fn set_orientation(&mut self, yaw: f32, pitch: f32) {
            self.orientation = (yaw, pitch);
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
    }

    #[test]
    fn test_pose_apply_to_rig() {
        let mut c = unbounded();
        c.on_look_delta(10.0, 10.0, 0.01);
        c.set_move_key(MoveKey::Forward, true);
        let pose = c.tick(0.016);

        let mut rig = RecordingRig { orientation: (0.0, 0.0), position: Vec3::ZERO };
        pose.apply_to(&mut rig);
        assert_eq!(rig.orientation, (pose.yaw, pose.pitch));
        assert_eq!(rig.position, pose.position);
    }
}
