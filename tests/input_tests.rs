// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod rotation {
    include!("../src/core/rotation.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use glam::{Mat4, Vec2, Vec3};
use input::*;

#[test]
fn press_and_release_in_place_is_a_tap() {
    let mut d = DragState::default();
    d.begin(Vec2::new(100.0, 100.0));
    assert_eq!(d.update(Vec2::new(103.0, 102.0), 6.0), None);
    assert!(d.end());
    assert!(!d.active);
}

#[test]
fn moving_past_threshold_becomes_a_drag() {
    let mut d = DragState::default();
    d.begin(Vec2::new(0.0, 0.0));
    assert_eq!(d.update(Vec2::new(4.0, 0.0), 6.0), None);
    // crossing the threshold reports movement since the last event
    assert_eq!(d.update(Vec2::new(10.0, 0.0), 6.0), Some(Vec2::new(6.0, 0.0)));
    assert_eq!(d.update(Vec2::new(10.0, 5.0), 6.0), Some(Vec2::new(0.0, 5.0)));
    assert!(!d.end(), "a drag is not a tap");
}

#[test]
fn cancelled_press_is_neither_drag_nor_tap() {
    let mut d = DragState::default();
    d.begin(Vec2::new(100.0, 100.0));
    assert_eq!(d.update(Vec2::new(120.0, 100.0), 6.0), Some(Vec2::new(20.0, 0.0)));
    d.cancel();
    assert!(!d.active, "auto-rotation resumes after a cancelled touch");
    assert_eq!(d.update(Vec2::new(140.0, 100.0), 6.0), None);
    // a release arriving after the cancel must not pick
    assert!(!d.end());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut d = DragState::default();
    assert_eq!(d.update(Vec2::new(50.0, 50.0), 6.0), None);
    assert!(!d.end());
}

#[test]
fn two_quick_close_taps_are_a_double_tap() {
    let mut dt = DoubleTapDetector::new(300.0, 30.0);
    assert!(!dt.register(1000.0, Vec2::new(200.0, 200.0)));
    assert!(dt.register(1250.0, Vec2::new(210.0, 195.0)));
}

#[test]
fn slow_second_tap_starts_over() {
    let mut dt = DoubleTapDetector::new(300.0, 30.0);
    assert!(!dt.register(0.0, Vec2::ZERO));
    assert!(!dt.register(400.0, Vec2::ZERO));
    // but it counts as the first tap of a new pair
    assert!(dt.register(600.0, Vec2::ZERO));
}

#[test]
fn distant_second_tap_is_not_a_double_tap() {
    let mut dt = DoubleTapDetector::new(300.0, 30.0);
    assert!(!dt.register(0.0, Vec2::ZERO));
    assert!(!dt.register(100.0, Vec2::new(40.0, 0.0)));
}

#[test]
fn double_tap_consumes_both_taps() {
    let mut dt = DoubleTapDetector::new(300.0, 30.0);
    dt.register(0.0, Vec2::ZERO);
    assert!(dt.register(100.0, Vec2::ZERO));
    assert!(!dt.register(200.0, Vec2::ZERO));
}

#[test]
fn reset_forgets_pending_tap() {
    let mut dt = DoubleTapDetector::new(300.0, 30.0);
    dt.register(0.0, Vec2::ZERO);
    dt.reset();
    assert!(!dt.register(100.0, Vec2::ZERO));
}

#[test]
fn ray_triangle_hit_and_distance() {
    let a = Vec3::new(-1.0, -1.0, 0.0);
    let b = Vec3::new(1.0, -1.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    let t = ray_triangle(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), a, b, c);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-5);
    // back face is hit too
    let t = ray_triangle(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), a, b, c);
    assert!(t.is_some());
}

#[test]
fn ray_triangle_misses() {
    let a = Vec3::new(-1.0, -1.0, 0.0);
    let b = Vec3::new(1.0, -1.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    // outside the triangle
    assert!(ray_triangle(Vec3::new(3.0, 0.0, 5.0), -Vec3::Z, a, b, c).is_none());
    // parallel to its plane
    assert!(ray_triangle(Vec3::new(0.0, 0.0, 1.0), Vec3::X, a, b, c).is_none());
    // triangle behind the origin
    assert!(ray_triangle(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, a, b, c).is_none());
}

fn heart_pick(target: Vec3) -> Option<f32> {
    let positions = geometry::heart_mesh().positions();
    let model = rotation::Rotation::default().model_matrix(HEART_SCALE);
    let eye = orbit::OrbitCamera::default().eye();
    pick_triangles(eye, (target - eye).normalize(), model, &positions)
}

#[test]
fn pick_hits_heart_body() {
    assert!(heart_pick(Vec3::new(0.0, -1.0, 0.0)).is_some());
}

#[test]
fn pick_misses_empty_space() {
    assert!(heart_pick(Vec3::new(5.0, 5.0, 0.0)).is_none());
}

#[test]
fn pick_follows_the_model_transform() {
    let tri = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let ro = Vec3::new(10.0, 0.0, 5.0);
    let rd = -Vec3::Z;
    assert!(pick_triangles(ro, rd, Mat4::IDENTITY, &tri).is_none());
    let moved = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    assert!(pick_triangles(ro, rd, moved, &tri).is_some());
}

#[test]
fn pick_returns_nearest_hit() {
    let near = [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
    ];
    let far = [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(0.0, 1.0, -1.0),
    ];
    let positions: Vec<Vec3> = far.iter().chain(near.iter()).copied().collect();
    let t = pick_triangles(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Mat4::IDENTITY, &positions);
    assert!((t.unwrap() - 4.0).abs() < 1e-5);
}

#[test]
fn pick_with_singular_model_misses() {
    let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let t = pick_triangles(Vec3::new(0.2, 0.2, 5.0), -Vec3::Z, Mat4::ZERO, &tri);
    assert!(t.is_none());
}
