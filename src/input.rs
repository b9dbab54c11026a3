use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

/// Pointer drag tracking for orbiting the camera.
///
/// A press only turns into a drag once the pointer has travelled further
/// than the drag threshold; otherwise the release counts as a tap.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub moved: bool,
    pub start: Vec2,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pos: Vec2) {
        self.active = true;
        self.moved = false;
        self.start = pos;
        self.last = pos;
    }

    /// Record a pointer move and return the delta to apply to the camera, if
    /// the press has become a drag.
    pub fn update(&mut self, pos: Vec2, threshold_px: f32) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        if !self.moved && pos.distance(self.start) > threshold_px {
            self.moved = true;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.moved.then_some(delta)
    }

    /// Abandon the press without reporting a tap (cancelled touch, lost
    /// capture).
    pub fn cancel(&mut self) {
        self.active = false;
        self.moved = false;
    }

    /// Release; returns `true` when the press was a tap rather than a drag.
    pub fn end(&mut self) -> bool {
        let was_tap = self.active && !self.moved;
        self.active = false;
        self.moved = false;
        was_tap
    }
}

/// Recognises two taps close together in time and space.
#[derive(Clone, Copy, Debug)]
pub struct DoubleTapDetector {
    window_ms: f64,
    max_distance: f32,
    last: Option<(f64, Vec2)>,
}

impl DoubleTapDetector {
    pub fn new(window_ms: f64, max_distance: f32) -> Self {
        Self {
            window_ms,
            max_distance,
            last: None,
        }
    }

    /// Register a tap; returns `true` when it completes a double tap.
    pub fn register(&mut self, time_ms: f64, pos: Vec2) -> bool {
        if let Some((t0, p0)) = self.last {
            let dt = time_ms - t0;
            if dt >= 0.0 && dt <= self.window_ms && pos.distance(p0) <= self.max_distance {
                self.last = None;
                return true;
            }
        }
        self.last = Some((time_ms, pos));
        false
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Möller–Trumbore ray/triangle intersection, both faces.
#[inline]
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = ray_dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray_origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Nearest hit of a world-space ray against a triangle list in model space.
///
/// `positions` holds three vertices per triangle. The returned distance is
/// measured in model space, which is enough to decide hit or miss.
pub fn pick_triangles(
    ray_origin: Vec3,
    ray_dir: Vec3,
    model: Mat4,
    positions: &[Vec3],
) -> Option<f32> {
    let inv = model.inverse();
    let ro = inv.transform_point3(ray_origin);
    let rd = inv.transform_vector3(ray_dir);
    if !ro.is_finite() || !rd.is_finite() {
        return None;
    }
    let mut best: Option<f32> = None;
    for tri in positions.chunks_exact(3) {
        if let Some(t) = ray_triangle(ro, rd, tri[0], tri[1], tri[2]) {
            match best {
                Some(bt) if t >= bt => {}
                _ => best = Some(t),
            }
        }
    }
    best
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
