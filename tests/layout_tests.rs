// Host-side tests for the photo layout geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/core/layout.rs");
}

use layout::*;

#[test]
fn empty_gallery_has_no_targets() {
    assert!(photo_targets(0).is_empty());
}

#[test]
fn one_target_per_photo_and_all_finite() {
    for count in [1, 2, 4, 5, 13, 20] {
        let targets = photo_targets(count);
        assert_eq!(targets.len(), count);
        for t in &targets {
            assert!(t.clustered.is_finite(), "clustered NaN at count {count}");
            assert!(t.scattered.is_finite(), "scattered NaN at count {count}");
        }
    }
}

#[test]
fn a_single_photo_sits_at_the_spiral_base() {
    let targets = photo_targets(1);
    let c = targets[0].clustered;
    // t = 0: full radius, base height, angle 0
    assert!((c.x - 4.0).abs() < 1e-4);
    assert!((c.y + 0.8).abs() < 1e-4);
    assert!(c.z.abs() < 1e-4);
}

#[test]
fn spiral_narrows_and_climbs_toward_the_crown() {
    let targets = photo_targets(13);
    let mut prev_radius = f32::MAX;
    let mut prev_height = f32::MIN;
    for t in &targets {
        let radius = (t.clustered.x * t.clustered.x + t.clustered.z * t.clustered.z).sqrt();
        assert!(radius < prev_radius, "radius must shrink with height");
        assert!(t.clustered.y > prev_height, "height must grow along the spiral");
        prev_radius = radius;
        prev_height = t.clustered.y;
    }

    // The last slot reaches the top of the spiral envelope
    let top = targets.last().unwrap().clustered;
    assert!((top.y - 5.7).abs() < 1e-3);
    let top_radius = (top.x * top.x + top.z * top.z).sqrt();
    assert!((top_radius - 1.2).abs() < 1e-3);
}

#[test]
fn two_photos_span_the_whole_spiral() {
    let targets = photo_targets(2);
    assert!((targets[0].clustered.y + 0.8).abs() < 1e-4);
    assert!((targets[1].clustered.y - 5.7).abs() < 1e-3);
}

#[test]
fn scattered_targets_sit_on_the_viewing_sphere() {
    let center = glam::Vec3::new(0.0, 2.5, 0.0);
    for count in [1, 3, 5, 11, 20] {
        for (i, t) in photo_targets(count).iter().enumerate() {
            let d = t.scattered.distance(center);
            assert!(
                (d - 8.5).abs() < 1e-3,
                "photo {i} of {count} off the sphere: {d}"
            );
            // The fan opens toward the camera side
            assert!(t.scattered.z > 0.0);
        }
    }
}

#[test]
fn a_scattered_row_spreads_left_to_right() {
    // Five photos fill exactly one row
    let targets = photo_targets(5);
    for pair in targets.windows(2) {
        assert!(pair[0].scattered.x < pair[1].scattered.x);
    }
    // One row means one shared height
    for t in &targets {
        assert!((t.scattered.y - targets[0].scattered.y).abs() < 1e-4);
    }
}

#[test]
fn scattered_rows_take_different_heights() {
    // Twenty photos make four rows of five
    let targets = photo_targets(20);
    let first_row_y = targets[0].scattered.y;
    let second_row_y = targets[5].scattered.y;
    assert!((first_row_y - second_row_y).abs() > 0.5);

    // Same column, so the rows only differ vertically around the sphere
    assert!((targets[0].scattered.x - targets[5].scattered.x).abs() < 1.0);
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(photo_targets(6), photo_targets(6));
}
