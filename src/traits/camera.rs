/// Camera-like object a pose is written into each frame.
///
/// Orientation is always applied yaw first (about world up), then pitch
/// about the resulting local right axis.
pub trait CameraRig {
    /// Set yaw and pitch in radians
    fn set_orientation(&mut self, yaw: f32, pitch: f32);

    /// Set the camera position in world space
    fn set_position(&mut self, position: glam::Vec3);
}
