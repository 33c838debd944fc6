use glam::Vec3;

use super::AABB;

/// Half-line used for shot queries
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized on construction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test. Returns the entry distance, or the exit distance when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &AABB) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Near-zero components are clamped so the division stays finite
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(inv(self.direction.x), inv(self.direction.y), inv(self.direction.z));

        let t_min = (aabb.min - self.origin) * inv_dir;
        let t_max = (aabb.max - self.origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.max_element();
        let t_far = t2.min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near < 0.0 {
            (t_far > 0.001).then_some(t_far)
        } else {
            Some(t_near)
        }
    }
}
