// config.rs - Tunables for the controller, camera and gallery
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{Boundary, AABB};

/// Walls sit at ±10; the player stays half a unit off them.
pub const ROOM_HALF_EXTENT: f32 = 9.5;
/// Floor plane is 50x50 units.
pub const FLOOR_HALF_EXTENT: f32 = 25.0;

/// How move speeds relate to frame time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveModel {
    /// Speeds are units per tick; frame time is ignored
    #[default]
    PerFrame,
    /// Speeds are units per second, scaled by frame time
    PerSecond,
}

/// What a single finger on the screen does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleTouchMode {
    #[default]
    Move,
    Look,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Radians per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Radians per pixel of touch movement
    pub touch_sensitivity: f32,
    pub move_speed: f32,
    /// Units per pixel of single-finger drag offset
    pub touch_move_speed: f32,
    /// Speed at full joystick deflection
    pub joystick_speed: f32,
    /// Joystick offset (pixels) that counts as full deflection
    pub joystick_radius: f32,
    pub move_model: MoveModel,
    pub single_touch: SingleTouchMode,
    pub start_position: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
    /// `null` disables clamping
    pub boundary: Option<Boundary>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.002,
            touch_sensitivity: 0.005,
            move_speed: 0.15,
            touch_move_speed: 0.002,
            joystick_speed: 0.15,
            joystick_radius: 50.0,
            move_model: MoveModel::PerFrame,
            single_touch: SingleTouchMode::Move,
            start_position: Vec3::new(0.0, 1.6, 5.0),
            start_yaw: 0.0,
            start_pitch: 0.0,
            boundary: Some(Boundary::square(ROOM_HALF_EXTENT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Initial target centers
    pub targets: Vec<Vec3>,
    /// Edge length of the cube targets
    pub target_size: f32,
    /// Respawn hit targets elsewhere instead of removing them
    pub respawn: bool,
    pub spawn_area: Boundary,
    pub spawn_min_y: f32,
    pub spawn_max_y: f32,
    pub seed: u32,
    /// Boxes that block shots (floor, walls)
    pub obstacles: Vec<AABB>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            targets: vec![Vec3::new(0.0, 1.0, -5.0)],
            target_size: 1.0,
            respawn: true,
            spawn_area: Boundary::square(ROOM_HALF_EXTENT),
            spawn_min_y: 0.5,
            spawn_max_y: 3.0,
            seed: 1,
            obstacles: vec![AABB::new(
                Vec3::new(-FLOOR_HALF_EXTENT, -0.01, -FLOOR_HALF_EXTENT),
                Vec3::new(FLOOR_HALF_EXTENT, 0.0, FLOOR_HALF_EXTENT),
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controller: ControllerConfig,
    pub camera: CameraConfig,
    pub gallery: GalleryConfig,
    /// Clicking engages pointer lock
    pub pointer_lock: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            camera: CameraConfig::default(),
            gallery: GalleryConfig::default(),
            pointer_lock: true,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = Config::from_json(
            r#"{ "controller": { "move_speed": 0.3, "move_model": "per_second" } }"#,
        )
        .unwrap();
        assert_eq!(config.controller.move_speed, 0.3);
        assert_eq!(config.controller.move_model, MoveModel::PerSecond);
        assert_eq!(config.controller.mouse_sensitivity, 0.002);
        assert!(config.pointer_lock);
    }

    #[test]
    fn null_boundary_disables_clamping() {
        let config = Config::from_json(r#"{ "controller": { "boundary": null } }"#).unwrap();
        assert!(config.controller.boundary.is_none());
    }

    #[test]
    fn vectors_parse_from_arrays() {
        let config = Config::from_json(
            r#"{ "gallery": { "targets": [[1, 2, 3], [4, 5, 6]] }, "controller": { "start_position": [0, 2, 0] } }"#,
        )
        .unwrap();
        assert_eq!(config.gallery.targets, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(config.controller.start_position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ controller: ").is_err());
    }
}
