use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground plane (x/z).
///
/// Clamping is per axis, so pressing into a corner stops on both walls
/// without any sliding response.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Boundary {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self { min_x, max_x, min_z, max_z }
    }

    /// Square centered on the origin
    pub const fn square(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    /// Clamp x and z independently; y passes through.
    ///
    /// Uses max/min rather than `f32::clamp` so an inverted rectangle from
    /// config does not panic.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y,
            point.z.max(self.min_z).min(self.max_z),
        )
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_z..=self.max_z).contains(&point.z)
    }
}
