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
fn easing_blends_stay_inside_the_unit_interval() {
    // Per-tick lerp factors outside (0, 1) either freeze or overshoot
    assert!(POS_BLEND > 0.0 && POS_BLEND < 1.0);
    assert!(POS_BLEND_FOCUSED > 0.0 && POS_BLEND_FOCUSED < 1.0);
    assert!(SCALE_BLEND > 0.0 && SCALE_BLEND < 1.0);
    assert!(GROUP_YAW_BLEND > 0.0 && GROUP_YAW_BLEND < 1.0);
    assert!(GROUP_YAW_SCATTER_DAMP > 0.0 && GROUP_YAW_SCATTER_DAMP <= 1.0);
    assert!(CAMERA_REST_BLEND > 0.0 && CAMERA_REST_BLEND < 1.0);
    assert!(CAMERA_FRAME_BLEND > 0.0 && CAMERA_FRAME_BLEND < 1.0);

    // A grabbed photo should answer faster than the idle drift
    assert!(POS_BLEND_FOCUSED > POS_BLEND);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_tiers_are_ordered() {
    assert!(SCALE_CLUSTERED > 0.0);
    assert!(SCALE_SCATTERED > SCALE_CLUSTERED);
    assert!(SCALE_FOCUSED > SCALE_SCATTERED);
    assert!(HOVER_SCALE_BOOST > 1.0);
    assert!(FOCUS_PUSH_OUT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn distance_compensation_clamp_is_sane() {
    assert!(DIST_COMP_MIN > 0.0);
    assert!(DIST_COMP_MIN < DIST_COMP_MAX);
    assert!(DIST_COMP_NUMERATOR > 0.0);

    // At the rest camera distance the compensation must sit strictly
    // inside the clamp, otherwise every panel rides a clamp edge
    let rest_dist = CAMERA_REST_EYE.distance(CAMERA_REST_LOOK);
    let comp = DIST_COMP_NUMERATOR / rest_dist;
    assert!(comp > DIST_COMP_MIN && comp < DIST_COMP_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < std::f32::consts::PI);
    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MAX_POLAR > 0.0 && ORBIT_MAX_POLAR < std::f32::consts::PI);

    // Rest pose and the framing distance both sit inside the zoom clamp
    let rest_radius = CAMERA_REST_EYE.distance(CAMERA_REST_LOOK);
    assert!(rest_radius > ORBIT_MIN_DISTANCE && rest_radius < ORBIT_MAX_DISTANCE);
    assert!(CAMERA_FRAME_DISTANCE > ORBIT_MIN_DISTANCE);
    assert!(CAMERA_FRAME_DISTANCE < ORBIT_MAX_DISTANCE);

    // The far plane must cover the camera fully zoomed out
    assert!(CAMERA_ZFAR > ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_constants_are_positive() {
    assert!(ORBIT_YAW_PER_PX > 0.0);
    assert!(ORBIT_PITCH_PER_PX > 0.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(PICK_RADIUS_PER_SCALE > 0.0);
    assert!(PANEL_FRAME_SIZE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gallery_capacity_is_reasonable() {
    assert!(MAX_PHOTOS > 0);
    // The scattered fan is a 5-column grid; the cap should fill whole rows
    assert!(MAX_PHOTOS % 5 == 0);
}

#[test]
fn world_anchors_are_finite() {
    assert!(SCATTER_LOOK_POINT.is_finite());
    assert!(WORLD_OFFSET.is_finite());
    assert!(CAMERA_REST_EYE.is_finite());
    assert!(CAMERA_REST_LOOK.is_finite());
}

#[test]
fn overlay_copy_is_present() {
    assert_eq!(WISHES.len(), 8);
    assert!(WISHES.iter().all(|w| !w.is_empty()));
    assert!(!GESTURE_LABEL_PALM.is_empty());
    assert!(!GESTURE_LABEL_FIST.is_empty());
    assert!(!GESTURE_LABEL_IDLE.is_empty());
    assert!(!FOCUS_CAPTION.is_empty());
    assert!(MUSIC_URL.starts_with("https://"));
    assert!(!MUSIC_TITLE.is_empty());
    assert!(!DETECTOR_HOOK_NAME.is_empty());
}

#[test]
fn panel_accents_are_valid_colors() {
    for accent in PANEL_ACCENTS {
        for channel in accent {
            assert!((0.0..=1.0).contains(&channel), "channel out of range: {channel}");
        }
    }
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        PHOTO_INPUT_ID,
        MUSIC_BUTTON_ID,
        CAMERA_BUTTON_ID,
        WISH_BUTTON_ID,
        WISH_CARD_ID,
        WISH_TEXT_ID,
        WISH_DISMISS_ID,
        GESTURE_LABEL_ID,
        PHOTO_COUNT_ID,
        CLEAR_FOCUS_ID,
        FOCUS_CAPTION_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b, "two overlay elements share the id {a}");
        }
    }
}
