// Host-side tests for the particle tree.
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
    pub mod tree {
        include!("../src/core/tree.rs");
    }
}

use tree_core::scene::TreeMode;
use tree_core::tree::{generate, TreeMotion, TreeParticle};

#[test]
fn particle_counts_are_stable() {
    let clouds = generate(7);
    // body + fog + star + stage + dust
    assert_eq!(clouds.steady.len(), 14_350);
    assert_eq!(clouds.ribbon.len(), 4_000);
}

#[test]
fn the_same_seed_grows_the_same_tree() {
    let a = generate(7);
    let b = generate(7);
    for (pa, pb) in a.steady.iter().zip(&b.steady) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.color, pb.color);
    }
    for (pa, pb) in a.ribbon.iter().zip(&b.ribbon) {
        assert_eq!(pa.position, pb.position);
    }
}

#[test]
fn different_seeds_grow_different_trees() {
    let a = generate(7);
    let b = generate(8);
    let diverged = a
        .steady
        .iter()
        .zip(&b.steady)
        .take(100)
        .any(|(pa, pb)| pa.position != pb.position);
    assert!(diverged, "seed must steer the particle placement");
}

#[test]
fn every_particle_is_drawable() {
    let clouds = generate(7);
    let all = clouds.steady.iter().chain(&clouds.ribbon);
    for particle in all {
        assert!(particle.position.is_finite());
        assert!(particle.size > 0.0);
        for channel in particle.color {
            assert!(
                (0.0..=1.0).contains(&channel),
                "color channel {channel} out of range"
            );
        }
    }
}

#[test]
fn steady_clouds_stay_inside_the_stage_volume() {
    let clouds = generate(7);
    for particle in &clouds.steady {
        let p = particle.position;
        assert!(p.x.abs() <= 9.0 && p.z.abs() <= 9.0, "stray particle at {p}");
        assert!((-6.0..=8.0).contains(&p.y), "stray particle at {p}");
    }
}

#[test]
fn the_ribbon_hugs_the_tree_cone() {
    let clouds = generate(7);
    for particle in &clouds.ribbon {
        let p = particle.position;
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!(radial <= 3.3, "ribbon strayed to radius {radial}");
        assert!((-1.1..=6.1).contains(&p.y), "ribbon strayed to height {}", p.y);
    }
}

#[test]
fn ribbon_narrows_toward_the_crown() {
    let clouds = generate(7);
    let base = clouds.ribbon.first().unwrap().position;
    let crown = clouds.ribbon.last().unwrap().position;
    let base_radial = (base.x * base.x + base.z * base.z).sqrt();
    let crown_radial = (crown.x * crown.x + crown.z * crown.z).sqrt();
    assert!(base_radial > 2.5, "ribbon base radius {base_radial}");
    assert!(crown_radial < 0.5, "ribbon crown radius {crown_radial}");
    assert!(crown.y > base.y + 6.0);
}

#[test]
fn tree_scale_breathes_with_the_mode() {
    let mut motion = TreeMotion::new();
    assert!((motion.scale - 1.0).abs() < 1e-6);

    for _ in 0..600 {
        motion.step(TreeMode::Scattered, 0.0);
    }
    assert!((motion.scale - 1.1).abs() < 1e-4);

    for _ in 0..600 {
        motion.step(TreeMode::Clustered, 0.0);
    }
    assert!((motion.scale - 1.0).abs() < 1e-4);
}

#[test]
fn tree_yaw_follows_the_hand_in_either_mode() {
    // The tree turns with the wrist at full magnitude; only the photo
    // group damps the input while scattered.
    let mut clustered = TreeMotion::new();
    let mut scattered = TreeMotion::new();
    for _ in 0..600 {
        clustered.step(TreeMode::Clustered, -2.5);
        scattered.step(TreeMode::Scattered, -2.5);
    }
    assert!((clustered.yaw - -2.5).abs() < 1e-3);
    assert!((scattered.yaw - -2.5).abs() < 1e-3);
}

#[test]
fn the_ribbon_spins_at_a_fixed_rate() {
    let mut motion = TreeMotion::new();
    for _ in 0..500 {
        motion.step(TreeMode::Clustered, 0.0);
    }
    assert!((motion.ribbon_yaw - 1.0).abs() < 1e-3);
}

#[test]
fn ribbon_glow_pulses_inside_its_band() {
    assert!((TreeMotion::ribbon_glow(0.0) - 0.4).abs() < 1e-6);

    let mut peak: f32 = 0.0;
    for i in 0..400 {
        let glow = TreeMotion::ribbon_glow(i as f32 * 0.01);
        assert!((0.4 - 1e-6..=1.0 + 1e-6).contains(&glow));
        peak = peak.max(glow);
    }
    assert!(peak > 0.95, "glow never reached its bright phase: {peak}");
}

#[test]
fn particles_copy_cheaply() {
    // TreeParticle feeds straight into instance buffers
    let particle = TreeParticle {
        position: glam::Vec3::ONE,
        size: 0.1,
        color: [1.0, 1.0, 1.0, 1.0],
    };
    let copy = particle;
    assert_eq!(particle.position, copy.position);
}
