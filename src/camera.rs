use crate::core::OrbitCamera;
use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `canvas`: target canvas to derive dimensions
/// - `pos`: pixel coordinates in the canvas' backing store space
/// - `camera`: the orbit camera used for rendering this frame
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    pos: Vec2,
    camera: &OrbitCamera,
) -> (Vec3, Vec3) {
    let width = canvas.width().max(1) as f32;
    let height = canvas.height().max(1) as f32;
    let ndc_x = (2.0 * pos.x / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * pos.y / height);
    camera.ray_through_ndc(ndc_x, ndc_y)
}
