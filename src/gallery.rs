use glam::Vec3;
use log::info;
use serde::Serialize;

use crate::config::GalleryConfig;
use crate::math::{Ray, AABB};
use crate::random::SeededRandom;

/// Cube that can be shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub id: u32,
    pub bounds: AABB,
}

/// Nearest box along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayHit {
    Target { index: usize, distance: f32 },
    Obstacle { index: usize, distance: f32 },
}

impl RayHit {
    pub fn distance(&self) -> f32 {
        match *self {
            RayHit::Target { distance, .. } | RayHit::Obstacle { distance, .. } => distance,
        }
    }
}

/// Result of a shot that struck a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    pub target_id: u32,
    pub distance: f32,
    pub point: [f32; 3],
    /// New center when the target respawned, `None` when it was removed
    pub respawned_at: Option<[f32; 3]>,
}

#[derive(Debug)]
pub struct Gallery {
    targets: Vec<Target>,
    obstacles: Vec<AABB>,
    config: GalleryConfig,
    rng: SeededRandom,
    next_id: u32,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        let mut gallery = Self {
            targets: Vec::with_capacity(config.targets.len()),
            obstacles: config.obstacles.clone(),
            rng: SeededRandom::new(config.seed),
            next_id: 0,
            config,
        };
        for center in gallery.config.targets.clone() {
            gallery.spawn(center);
        }
        info!(
            "Gallery created: {} targets, {} obstacles",
            gallery.targets.len(),
            gallery.obstacles.len()
        );
        gallery
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn obstacles(&self) -> &[AABB] {
        &self.obstacles
    }

    /// Add a target centered at `center` and return its id
    pub fn spawn(&mut self, center: Vec3) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.targets.push(Target {
            id,
            bounds: AABB::from_center_size(center, Vec3::splat(self.config.target_size)),
        });
        id
    }

    /// Nearest target or obstacle along `ray`. Ties go to the target.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let nearest_target = self
            .targets
            .iter()
            .enumerate()
            .filter_map(|(index, t)| ray.intersect_aabb(&t.bounds).map(|distance| RayHit::Target { index, distance }));

        let nearest_obstacle = self
            .obstacles
            .iter()
            .enumerate()
            .filter_map(|(index, b)| ray.intersect_aabb(b).map(|distance| RayHit::Obstacle { index, distance }));

        nearest_target
            .chain(nearest_obstacle)
            .min_by(|a, b| a.distance().total_cmp(&b.distance()))
    }

    /// Fire along `ray`. A target struck first is respawned or removed.
    pub fn shoot(&mut self, ray: &Ray) -> Option<Hit> {
        let RayHit::Target { index, distance } = self.raycast(ray)? else {
            return None;
        };

        let target_id = self.targets[index].id;
        let point = ray.at(distance).to_array();

        let respawned_at = if self.config.respawn {
            let center = self.random_spawn_point();
            self.targets[index].bounds = self.targets[index].bounds.recentered(center);
            info!("Target {target_id} hit at {distance:.2}, respawned at {center:?}");
            Some(center.to_array())
        } else {
            self.targets.remove(index);
            info!("Target {target_id} hit at {distance:.2}, removed");
            None
        };

        Some(Hit {
            target_id,
            distance,
            point,
            respawned_at,
        })
    }

    fn random_spawn_point(&mut self) -> Vec3 {
        let area = self.config.spawn_area;
        Vec3::new(
            self.rng.next_range(area.min_x, area.max_x),
            self.rng.next_range(self.config.spawn_min_y, self.config.spawn_max_y),
            self.rng.next_range(area.min_z, area.max_z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z)
    }

    #[test]
    fn default_gallery_has_one_target_ahead() {
        let gallery = Gallery::new(GalleryConfig::default());
        assert_eq!(gallery.targets().len(), 1);
        match gallery.raycast(&forward_ray()) {
            Some(RayHit::Target { index: 0, distance }) => assert!((distance - 9.5).abs() < 1e-4),
            other => panic!("expected target hit, got {other:?}"),
        }
    }

    #[test]
    fn ids_are_sequential() {
        let mut gallery = Gallery::new(GalleryConfig {
            targets: vec![],
            ..Default::default()
        });
        assert_eq!(gallery.spawn(Vec3::ZERO), 0);
        assert_eq!(gallery.spawn(Vec3::ONE), 1);
    }

    #[test]
    fn floor_counts_as_obstacle() {
        let gallery = Gallery::new(GalleryConfig::default());
        let down = Ray::new(Vec3::new(3.0, 1.6, 3.0), Vec3::NEG_Y);
        assert!(matches!(gallery.raycast(&down), Some(RayHit::Obstacle { index: 0, .. })));
    }

    #[test]
    fn shooting_removes_when_respawn_disabled() {
        let mut gallery = Gallery::new(GalleryConfig {
            respawn: false,
            ..Default::default()
        });
        let hit = gallery.shoot(&forward_ray()).unwrap();
        assert_eq!(hit.target_id, 0);
        assert_eq!(hit.respawned_at, None);
        assert!(gallery.targets().is_empty());
        assert!(gallery.shoot(&forward_ray()).is_none());
    }
}
