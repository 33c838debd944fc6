use glam::{Mat4, Quat, Vec3};

use crate::camera::CameraPose;
use crate::config::CameraConfig;
use crate::math::Ray;
use crate::traits::CameraRig;
use crate::types::CameraUniform;

/// Perspective camera the controller pose is written into.
///
/// Stands in for the host engine's camera: it knows the viewport and can
/// turn a click position into a world-space ray.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    width: u32,
    height: u32,
}

impl SceneCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            width: config.width.max(1),
            height: config.height.max(1),
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Track a window resize. Zero-sized (minimized) viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    pub fn look_direction(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// Ray through a client-space point (pixels, origin top-left)
    pub fn screen_ray(&self, x: f32, y: f32) -> Ray {
        let ndc_x = (x / self.width as f32) * 2.0 - 1.0;
        let ndc_y = -(y / self.height as f32) * 2.0 + 1.0;

        let inv_view_proj = (self.projection_matrix() * self.view_matrix()).inverse();
        let near = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, -1.0));
        let far = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(self.position, far - near)
    }

    /// Ray along the crosshair
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.position, self.look_direction())
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        let pose = CameraPose::new(self.yaw, self.pitch, self.position);
        let rotation = self.rotation();
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: pose.look_direction().to_array(),
            _pad2: 0.0,
            right: (rotation * Vec3::X).to_array(),
            _pad3: 0.0,
            up: (rotation * Vec3::Y).to_array(),
            time,
        }
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl CameraRig for SceneCamera {
    fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn screen_center_matches_look_direction() {
        let mut camera = SceneCamera::default();
        camera.set_orientation(0.7, -0.3);
        camera.set_position(Vec3::new(1.0, 1.6, 2.0));

        let (w, h) = camera.viewport();
        let ray = camera.screen_ray(w as f32 / 2.0, h as f32 / 2.0);
        assert!(ray.direction.abs_diff_eq(camera.look_direction(), EPSILON));
        assert_eq!(ray.origin, camera.position);
    }

    #[test]
    fn top_left_ray_points_up_and_left() {
        let camera = SceneCamera::default();
        let ray = camera.screen_ray(0.0, 0.0);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);

        // Corner of the frustum: slopes are tan(fov/2) and tan(fov/2) * aspect
        let half_tan = (camera.fov_y / 2.0).tan();
        assert!((ray.direction.y / -ray.direction.z - half_tan).abs() < EPSILON);
        assert!((-ray.direction.x / -ray.direction.z - half_tan * camera.aspect()).abs() < EPSILON);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = SceneCamera::default();
        camera.resize(1920, 1080);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < EPSILON);
        camera.resize(0, 500);
        assert_eq!(camera.viewport(), (1920, 1080));
    }

    #[test]
    fn uniform_basis_is_orthonormal() {
        let mut camera = SceneCamera::default();
        camera.set_orientation(1.2, 0.4);
        let u = camera.to_uniform(3.0);
        let f = Vec3::from_array(u.forward);
        let r = Vec3::from_array(u.right);
        let up = Vec3::from_array(u.up);
        assert!(f.dot(r).abs() < EPSILON);
        assert!(f.dot(up).abs() < EPSILON);
        assert!((f.length() - 1.0).abs() < EPSILON);
        assert_eq!(u.time, 3.0);
    }
}
