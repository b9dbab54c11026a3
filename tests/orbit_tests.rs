// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use constants::*;
use glam::Vec3;
use orbit::*;

#[test]
fn default_eye_is_on_plus_z() {
    let cam = OrbitCamera::default();
    assert!(cam.eye().distance(Vec3::new(0.0, 0.0, CAMERA_DISTANCE)) < 1e-4);
}

#[test]
fn auto_rotate_completes_a_turn_in_thirty_seconds() {
    let mut cam = OrbitCamera::default();
    cam.auto_rotate(7.5);
    // quarter turn clockwise seen from above
    assert!(
        cam.eye().distance(Vec3::new(-CAMERA_DISTANCE, 0.0, 0.0)) < 1e-3,
        "eye {:?}",
        cam.eye()
    );
    cam.auto_rotate(22.5);
    assert!(cam.eye().distance(Vec3::new(0.0, 0.0, CAMERA_DISTANCE)) < 1e-3);
}

#[test]
fn auto_rotate_can_be_disabled() {
    let mut cam = OrbitCamera {
        auto_rotate: false,
        ..OrbitCamera::default()
    };
    cam.auto_rotate(5.0);
    assert_eq!(cam.azimuth, 0.0);
}

#[test]
fn drag_keeps_distance_and_clamps_polar() {
    let mut cam = OrbitCamera::default();
    cam.drag(120.0, -80.0, 600.0);
    assert!((cam.eye().length() - CAMERA_DISTANCE).abs() < 1e-3);

    cam.drag(0.0, 1e6, 600.0);
    assert!(cam.polar >= POLAR_EPSILON);
    cam.drag(0.0, -1e6, 600.0);
    assert!(cam.polar <= std::f32::consts::PI - POLAR_EPSILON);
    assert!(cam.eye().is_finite());
}

#[test]
fn full_height_drag_is_one_turn() {
    let mut cam = OrbitCamera::default();
    cam.drag(600.0, 0.0, 600.0);
    assert!((cam.azimuth + std::f32::consts::TAU).abs() < 1e-4);
}

#[test]
fn drag_with_zero_height_is_ignored() {
    let mut cam = OrbitCamera::default();
    cam.drag(50.0, 50.0, 0.0);
    assert_eq!(cam.azimuth, 0.0);
    assert_eq!(cam.polar, std::f32::consts::FRAC_PI_2);
}

#[test]
fn set_aspect_ignores_empty_viewport() {
    let mut cam = OrbitCamera::default();
    cam.set_aspect(1600.0, 800.0);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    cam.set_aspect(0.0, 800.0);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
}

#[test]
fn center_ray_points_at_origin() {
    let mut cam = OrbitCamera::default();
    cam.drag(37.0, 21.0, 500.0);
    let (ro, rd) = cam.ray_through_ndc(0.0, 0.0);
    assert!(ro.distance(cam.eye()) < 1e-5);
    assert!((rd.length() - 1.0).abs() < 1e-4);
    assert!(rd.dot(-cam.eye().normalize()) > 0.9999);
}

#[test]
fn basis_is_orthonormal_and_faces_camera() {
    let mut cam = OrbitCamera::default();
    cam.drag(-90.0, 40.0, 400.0);
    let (right, up) = cam.basis();
    let forward = -cam.eye().normalize();
    assert!((right.length() - 1.0).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(right.dot(up).abs() < 1e-4);
    assert!(right.dot(forward).abs() < 1e-4);
    assert!(up.dot(forward).abs() < 1e-4);
}
