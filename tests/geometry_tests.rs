// Host-side tests for the heart outline, triangulation and extrusion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use constants::*;
use geometry::*;
use glam::{Vec2, Vec3};

fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a) * 0.5
}

#[test]
fn outline_sample_is_closed_ccw_and_deduplicated() {
    let pts = heart_outline().sample(HEART_CURVE_DIVISIONS);
    assert!(pts.len() >= 3 * HEART_CURVE_DIVISIONS);
    assert!(signed_area(&pts) > 0.0, "outline should be counter-clockwise");
    for w in pts.windows(2) {
        assert!(w[0].distance(w[1]) > 1e-5, "consecutive duplicate at {:?}", w[0]);
    }
    // closing point is not repeated
    assert!(pts[0].distance(pts[pts.len() - 1]) > 1e-5);
}

#[test]
fn outline_spans_expected_box() {
    let pts = heart_outline().sample(HEART_CURVE_DIVISIONS);
    let min = pts.iter().fold(Vec2::splat(f32::MAX), |m, p| m.min(*p));
    let max = pts.iter().fold(Vec2::splat(f32::MIN), |m, p| m.max(*p));
    assert!((min.x + 3.5).abs() < 1e-3, "min.x = {}", min.x);
    assert!((max.x - 3.5).abs() < 1e-3, "max.x = {}", max.x);
    assert!((min.y + 5.0).abs() < 1e-3, "tip at {}", min.y);
    assert!(max.y <= 1.5 + 1e-3);
}

#[test]
fn cubic_segment_hits_endpoints() {
    let seg = CubicSegment::new([1.0, 2.0], [3.0, 4.0], [5.0, 6.0]);
    let start = Vec2::new(-1.0, 0.0);
    assert_eq!(seg.point_at(start, 0.0), start);
    assert!(seg.point_at(start, 1.0).distance(Vec2::new(5.0, 6.0)) < 1e-6);
}

#[test]
fn triangulate_square() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let tris = triangulate(&square);
    assert_eq!(tris.len(), 2);
    let area: f32 = tris
        .iter()
        .map(|t| triangle_area(square[t[0]], square[t[1]], square[t[2]]))
        .sum();
    assert!((area - 1.0).abs() < 1e-6);
}

#[test]
fn triangulate_clockwise_input_still_yields_ccw_triangles() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ];
    for t in triangulate(&square) {
        assert!(triangle_area(square[t[0]], square[t[1]], square[t[2]]) > 0.0);
    }
}

#[test]
fn triangulate_too_few_points_is_empty() {
    assert!(triangulate(&[Vec2::ZERO, Vec2::X]).is_empty());
}

#[test]
fn triangulate_heart_covers_its_area() {
    let pts = heart_outline().sample(HEART_CURVE_DIVISIONS);
    let tris = triangulate(&pts);
    assert_eq!(tris.len(), pts.len() - 2);
    let area: f32 = tris
        .iter()
        .map(|t| triangle_area(pts[t[0]], pts[t[1]], pts[t[2]]))
        .sum();
    let expected = signed_area(&pts);
    assert!(
        ((area - expected) / expected).abs() < 1e-2,
        "triangles cover {area}, polygon is {expected}"
    );
}

#[test]
fn heart_mesh_depth_includes_bevel() {
    let mesh = heart_mesh();
    assert!(mesh.triangle_count() > 0);
    let positions = mesh.positions();
    assert_eq!(positions.len(), mesh.vertices.len());
    let min_z = positions.iter().map(|p| p.z).fold(f32::MAX, f32::min);
    let max_z = positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
    assert!((min_z + BEVEL_THICKNESS).abs() < 1e-5, "min z {min_z}");
    assert!(
        (max_z - (EXTRUDE_DEPTH + BEVEL_THICKNESS)).abs() < 1e-5,
        "max z {max_z}"
    );
}

#[test]
fn heart_mesh_bevel_stays_near_outline() {
    let mesh = heart_mesh();
    let reach = BEVEL_SIZE * MAX_MITER_LENGTH + 1e-3;
    for p in mesh.positions() {
        assert!(p.is_finite());
        assert!(p.x.abs() <= 3.5 + reach, "x out of range: {}", p.x);
        assert!(p.y >= -5.0 - reach && p.y <= 1.5 + reach, "y out of range: {}", p.y);
    }
}

#[test]
fn heart_mesh_normals_are_unit_and_caps_face_outward() {
    let mesh = heart_mesh();
    let mut front = 0;
    let mut back = 0;
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        if (v.position[2] + BEVEL_THICKNESS).abs() < 1e-6 && n.z.abs() > 0.999 {
            assert!(n.z < 0.0, "front cap normal points inward");
            front += 1;
        }
        if (v.position[2] - (EXTRUDE_DEPTH + BEVEL_THICKNESS)).abs() < 1e-6 && n.z.abs() > 0.999 {
            assert!(n.z > 0.0, "back cap normal points inward");
            back += 1;
        }
    }
    assert!(front > 0 && back > 0);
}

#[test]
fn extrude_without_bevel_is_a_plain_prism() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let settings = ExtrudeSettings {
        depth: 2.0,
        bevel_thickness: 0.0,
        bevel_size: 0.0,
        bevel_segments: 0,
    };
    let mesh = extrude(&square, &settings);
    // 4 walls * 2 + 2 caps * 2
    assert_eq!(mesh.triangle_count(), 12);
    for p in mesh.positions() {
        assert!(p.z == 0.0 || p.z == 2.0);
        assert!(p.x >= 0.0 && p.x <= 1.0 && p.y >= 0.0 && p.y <= 1.0);
    }
}

#[test]
fn extrude_degenerate_outline_is_empty() {
    let mesh = extrude(&[Vec2::ZERO, Vec2::X], &ExtrudeSettings::default());
    assert_eq!(mesh.triangle_count(), 0);
}
