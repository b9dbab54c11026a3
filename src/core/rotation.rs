use super::constants::{ROTATION_RATE_X, ROTATION_RATE_Y};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Rotation of the heart around its local X and Y axes, in radians.
///
/// Owned by the frame loop; angles grow without bound since they are only
/// consumed through trigonometric transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Advance both angles by `delta_sec` times their fixed rates.
    ///
    /// Negative or NaN deltas are treated as zero.
    #[inline]
    pub fn advance(&mut self, delta_sec: f32) {
        let dt = delta_sec.max(0.0);
        self.x += dt * ROTATION_RATE_X;
        self.y += dt * ROTATION_RATE_Y;
    }

    /// Model transform: uniform scale, then X-then-Y Euler rotation.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0),
            Vec3::ZERO,
        )
    }
}
