// Host-side tests for hand-landmark classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tree_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
    pub mod gesture {
        include!("../src/core/gesture.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use tree_core::gesture::*;
use tree_core::scene::{SceneState, TreeMode};

// A full 21-landmark hand with the wrist and index tip placed explicitly.
fn hand(wrist: (f32, f32), index_tip: (f32, f32)) -> Vec<Landmark> {
    let mut lm = vec![Landmark::default(); 21];
    lm[WRIST] = Landmark {
        x: wrist.0,
        y: wrist.1,
        z: 0.0,
    };
    lm[INDEX_TIP] = Landmark {
        x: index_tip.0,
        y: index_tip.1,
        z: 0.0,
    };
    lm
}

#[test]
fn landmarks_from_flat_decodes_triples() {
    let flat = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
    let lm = landmarks_from_flat(&flat);
    assert_eq!(lm.len(), 2);
    assert_eq!(lm[0], Landmark { x: 0.1, y: 0.2, z: 0.3 });
    assert_eq!(lm[1], Landmark { x: 0.4, y: 0.5, z: 0.6 });
}

#[test]
fn landmarks_from_flat_drops_a_ragged_tail() {
    let flat = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    assert_eq!(landmarks_from_flat(&flat).len(), 2);
    assert!(landmarks_from_flat(&[]).is_empty());
}

#[test]
fn classify_needs_both_key_landmarks() {
    assert_eq!(classify(&[]), None);
    // Wrist present but the buffer ends before the index tip
    let short = vec![Landmark::default(); INDEX_TIP];
    assert_eq!(classify(&short), None);
}

#[test]
fn small_vertical_spread_reads_as_a_fist() {
    let sample = classify(&hand((0.5, 0.5), (0.5, 0.6))).unwrap();
    assert_eq!(sample.gesture, Gesture::Fist);
}

#[test]
fn wide_vertical_spread_reads_as_a_palm() {
    let sample = classify(&hand((0.5, 0.1), (0.5, 0.7))).unwrap();
    assert_eq!(sample.gesture, Gesture::Palm);
}

#[test]
fn boundary_spread_reads_as_a_palm() {
    // Exactly the fist threshold counts as open
    let sample = classify(&hand((0.5, 0.0), (0.5, 0.3))).unwrap();
    assert_eq!(sample.gesture, Gesture::Palm);
}

#[test]
fn spread_direction_does_not_matter() {
    // Index tip above the wrist in image space still spreads
    let sample = classify(&hand((0.5, 0.8), (0.5, 0.2))).unwrap();
    assert_eq!(sample.gesture, Gesture::Palm);
}

#[test]
fn wrist_x_maps_onto_a_full_turn() {
    let centered = classify(&hand((0.5, 0.0), (0.5, 0.7))).unwrap();
    assert!(centered.rotation_y.abs() < 1e-5);

    let right = classify(&hand((1.0, 0.0), (1.0, 0.7))).unwrap();
    assert!((right.rotation_y - std::f32::consts::PI).abs() < 1e-5);

    let left = classify(&hand((0.0, 0.0), (0.0, 0.7))).unwrap();
    assert!((left.rotation_y + std::f32::consts::PI).abs() < 1e-5);
}

#[test]
fn apply_drives_mode_gesture_and_rotation() {
    let mut scene = SceneState::new(Vec::new());

    apply(
        &mut scene,
        Some(GestureSample {
            gesture: Gesture::Palm,
            rotation_y: 1.2,
        }),
    );
    assert_eq!(scene.gesture(), Gesture::Palm);
    assert_eq!(scene.mode(), TreeMode::Scattered);
    assert_eq!(scene.rotation_input(), 1.2);

    apply(
        &mut scene,
        Some(GestureSample {
            gesture: Gesture::Fist,
            rotation_y: -0.4,
        }),
    );
    assert_eq!(scene.gesture(), Gesture::Fist);
    assert_eq!(scene.mode(), TreeMode::Clustered);
    assert_eq!(scene.rotation_input(), -0.4);
}

#[test]
fn losing_the_hand_keeps_mode_and_rotation_sticky() {
    let mut scene = SceneState::new(Vec::new());
    apply(
        &mut scene,
        Some(GestureSample {
            gesture: Gesture::Palm,
            rotation_y: 0.9,
        }),
    );

    apply(&mut scene, None);
    assert_eq!(scene.gesture(), Gesture::None);
    // The tree stays where the last gesture left it
    assert_eq!(scene.mode(), TreeMode::Scattered);
    assert_eq!(scene.rotation_input(), 0.9);
}
