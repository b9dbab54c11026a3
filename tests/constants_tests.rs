// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Extrusion
    assert!(EXTRUDE_DEPTH > 0.0);
    assert!(BEVEL_THICKNESS >= 0.0 && BEVEL_SIZE >= 0.0);
    assert!(HEART_CURVE_DIVISIONS >= 1);
    assert!(MAX_MITER_LENGTH >= 1.0);
    assert!(HEART_SCALE > 0.0);

    // Material
    for c in HEART_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!((0.0..=1.0).contains(&HEART_ROUGHNESS));
    assert!((0.0..=1.0).contains(&HEART_METALNESS));

    // Particles sit outside the heart and inside the far plane
    assert!(PARTICLE_RADIUS_MIN_FACTOR > 0.0);
    assert!(PARTICLE_BASE_RADIUS * (PARTICLE_RADIUS_MIN_FACTOR + PARTICLE_RADIUS_SPAN_FACTOR) < CAMERA_ZFAR);
    assert!(PARTICLE_OPACITY >= PARTICLE_ALPHA_TEST, "alpha test would discard every particle");

    // Camera
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEGREES > 0.0 && CAMERA_FOVY_DEGREES < 180.0);
    assert!(POLAR_EPSILON > 0.0 && POLAR_EPSILON < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_match_behavior() {
    assert_eq!(HINT_DELAY_MS, 10_000);
    assert!((LINE_STAGGER_SEC - 0.5).abs() < 1e-6);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    // one full auto-rotate orbit every 60 / speed seconds
    let period = 60.0 / AUTO_ROTATE_SPEED;
    assert!((period - 30.0).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_constants_are_sane() {
    assert!(DOUBLE_TAP_WINDOW_MS > 0.0);
    assert!(DOUBLE_TAP_MAX_DISTANCE_PX > DRAG_THRESHOLD_PX);
    assert!(DRAG_THRESHOLD_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn post_stack_parameters() {
    assert!(BLOOM_SMOOTHING > 0.0);
    assert!(BLOOM_INTENSITY >= 0.0);
    assert!((0.0..=1.0).contains(&NOISE_OPACITY));
    assert!(VIGNETTE_OFFSET >= 0.0 && VIGNETTE_DARKNESS > 0.0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        CONFIG_ID,
        FULLSCREEN_PROMPT_ID,
        FULLSCREEN_ACCEPT_ID,
        HINT_ID,
        LETTER_ID,
        LETTER_LINES_ID,
        LETTER_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(LETTER_LINE_ID_PREFIX.ends_with('-'));
}

#[test]
fn fullscreen_prefers_standard_method() {
    assert_eq!(FULLSCREEN_METHODS[0], "requestFullscreen");
    assert!(FULLSCREEN_METHODS[1..]
        .iter()
        .all(|m| m.ends_with("RequestFullscreen")));
}
