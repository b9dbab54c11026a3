use super::constants::{
    AUTO_ROTATE_SPEED, CAMERA_DISTANCE, CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR,
    POLAR_EPSILON,
};
use glam::{Mat4, Vec3, Vec4};

/// Camera orbiting the origin on a sphere of fixed radius (no zoom).
///
/// `azimuth` is measured around +Y from +Z, `polar` from +Y. With both at
/// their defaults the eye sits on +Z looking at the origin.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub auto_rotate: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: CAMERA_DISTANCE,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            auto_rotate: true,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        Vec3::new(
            self.distance * s * self.azimuth.sin(),
            self.distance * self.polar.cos(),
            self.distance * s * self.azimuth.cos(),
        )
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Spin around the Y axis at the auto-rotate speed (2.0 = 30 s per turn).
    pub fn auto_rotate(&mut self, dt_sec: f32) {
        if !self.auto_rotate {
            return;
        }
        let rate = std::f32::consts::TAU / 60.0 * AUTO_ROTATE_SPEED;
        self.azimuth -= rate * dt_sec.max(0.0);
    }

    /// Orbit by a pointer drag; a drag across the full viewport height turns
    /// the camera once.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        if viewport_height_px <= 0.0 {
            return;
        }
        let k = std::f32::consts::TAU / viewport_height_px;
        self.azimuth -= dx_px * k;
        self.polar = (self.polar - dy_px * k).clamp(
            POLAR_EPSILON,
            std::f32::consts::PI - POLAR_EPSILON,
        );
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera-space right and up axes in world space (for billboards).
    pub fn basis(&self) -> (Vec3, Vec3) {
        let inv = self.view_matrix().inverse();
        (
            inv.transform_vector3(Vec3::X).normalize(),
            inv.transform_vector3(Vec3::Y).normalize(),
        )
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the direction is unit length.
    pub fn ray_through_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        let ro = self.eye();
        (ro, (far - ro).normalize())
    }
}
