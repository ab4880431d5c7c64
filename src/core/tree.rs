use glam::Vec3;
use rand::prelude::*;

use super::scene::TreeMode;

// Decorative particle clouds the photos wrap. Generation is seeded so a
// given seed always produces the same tree.

const BODY_COUNT: usize = 10_000;
const FOG_COUNT: usize = 3_000;
const RIBBON_COUNT: usize = 4_000;
const STAR_COUNT: usize = 800;
const STAGE_COUNT: usize = 250;
const DUST_COUNT: usize = 300;

// Cone envelope shared by the body and fog shells
const TREE_HEIGHT: f32 = 7.0;
const TREE_BASE_Y: f32 = -1.0;
const BODY_RADIUS: f32 = 3.0;
const BODY_RADIAL_BIAS: f32 = 0.6;
const FOG_RADIUS: f32 = 3.5;
const FOG_RADIAL_BIAS: f32 = 0.8;

// Gold ribbon spiral
const RIBBON_TURNS_ANGLE: f32 = std::f32::consts::PI * 14.0;
const RIBBON_RADIUS: f32 = 3.2;
const RIBBON_JITTER: f32 = 0.08;

// Star burst above the crown
const STAR_CENTER_Y: f32 = 6.2;
const STAR_RADIUS: f32 = 1.2;

// Stage dust ring under the tree and ambient dust around it
const STAGE_CENTER_Y: f32 = -3.8;
const STAGE_EXTENT: Vec3 = Vec3::new(7.0, 0.5, 4.0);
const DUST_EXTENT: Vec3 = Vec3::new(12.0, 10.0, 12.0);

// Sprite colors (rgb + alpha) and sizes
const BODY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
const BODY_SIZE: f32 = 0.06;
const FOG_COLOR: [f32; 4] = [0.878, 0.949, 0.996, 0.10];
const FOG_SIZE: f32 = 0.12;
const RIBBON_COLOR: [f32; 4] = [1.0, 0.843, 0.0, 0.8];
const RIBBON_SIZE: f32 = 0.035;
const STAR_COLOR: [f32; 4] = [1.0, 0.976, 0.859, 0.4];
const STAR_SIZE: f32 = 0.08;
const STAGE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.4];
const STAGE_SIZE: f32 = 0.1;
const DUST_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
const DUST_SIZE: f32 = 0.1;

// Tree group easing (per tick, see constants.rs cadence note)
const TREE_YAW_BLEND: f32 = 0.05;
const TREE_SCALE_BLEND: f32 = 0.08;
const TREE_SCALE_SCATTERED: f32 = 1.1;
const TREE_SCALE_CLUSTERED: f32 = 1.0;
const RIBBON_SPIN_PER_TICK: f32 = 0.002;
const RIBBON_GLOW_BASE: f32 = 0.4;
const RIBBON_GLOW_SPAN: f32 = 0.6;
const RIBBON_GLOW_RATE: f32 = 8.0;

#[derive(Clone, Copy, Debug)]
pub struct TreeParticle {
    pub position: Vec3,
    pub size: f32,
    pub color: [f32; 4],
}

/// Steady clouds share one static buffer; the ribbon rotates and strobes
/// on its own, so it draws separately.
pub struct TreeClouds {
    pub steady: Vec<TreeParticle>,
    pub ribbon: Vec<TreeParticle>,
}

pub fn generate(seed: u64) -> TreeClouds {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut steady = Vec::with_capacity(BODY_COUNT + FOG_COUNT + STAR_COUNT + STAGE_COUNT + DUST_COUNT);
    cone_shell(&mut rng, &mut steady, BODY_COUNT, BODY_RADIUS, BODY_RADIAL_BIAS, BODY_SIZE, BODY_COLOR);
    cone_shell(&mut rng, &mut steady, FOG_COUNT, FOG_RADIUS, FOG_RADIAL_BIAS, FOG_SIZE, FOG_COLOR);
    star_burst(&mut rng, &mut steady);
    box_dust(&mut rng, &mut steady, STAGE_COUNT, Vec3::new(0.0, STAGE_CENTER_Y, 0.0), STAGE_EXTENT, STAGE_SIZE, STAGE_COLOR);
    box_dust(&mut rng, &mut steady, DUST_COUNT, Vec3::ZERO, DUST_EXTENT, DUST_SIZE, DUST_COLOR);

    let ribbon = gold_ribbon(&mut rng);

    TreeClouds { steady, ribbon }
}

// Dense cone: uniform in height, radius tapering toward the crown with a
// power-law bias pulling points inward.
fn cone_shell(
    rng: &mut StdRng,
    out: &mut Vec<TreeParticle>,
    count: usize,
    max_radius: f32,
    radial_bias: f32,
    size: f32,
    color: [f32; 4],
) {
    for _ in 0..count {
        let y = rng.gen::<f32>() * TREE_HEIGHT + TREE_BASE_Y;
        let norm_y = (y - TREE_BASE_Y) / TREE_HEIGHT;
        let radius = (1.0 - norm_y) * max_radius * rng.gen::<f32>().powf(radial_bias);
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        out.push(TreeParticle {
            position: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
            size,
            color,
        });
    }
}

// Burst concentrated at the center, fading out toward STAR_RADIUS.
fn star_burst(rng: &mut StdRng, out: &mut Vec<TreeParticle>) {
    for _ in 0..STAR_COUNT {
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0f32).acos();
        let r = rng.gen::<f32>().powi(2) * STAR_RADIUS;
        out.push(TreeParticle {
            position: Vec3::new(
                r * phi.sin() * angle.cos(),
                STAR_CENTER_Y + r * phi.sin() * angle.sin(),
                r * phi.cos(),
            ),
            size: STAR_SIZE,
            color: STAR_COLOR,
        });
    }
}

fn box_dust(
    rng: &mut StdRng,
    out: &mut Vec<TreeParticle>,
    count: usize,
    center: Vec3,
    extent: Vec3,
    size: f32,
    color: [f32; 4],
) {
    for _ in 0..count {
        let unit = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        );
        out.push(TreeParticle {
            position: center + unit * extent,
            size,
            color,
        });
    }
}

// Tight spiral with micro-jitter for the silk-ribbon look.
fn gold_ribbon(rng: &mut StdRng) -> Vec<TreeParticle> {
    (0..RIBBON_COUNT)
        .map(|i| {
            let t = i as f32 / RIBBON_COUNT as f32;
            let angle = t * RIBBON_TURNS_ANGLE;
            let r = (1.0 - t) * RIBBON_RADIUS;
            let y = t * TREE_HEIGHT + TREE_BASE_Y;
            let position = Vec3::new(
                angle.cos() * r + (rng.gen::<f32>() - 0.5) * RIBBON_JITTER,
                y + (rng.gen::<f32>() - 0.5) * RIBBON_JITTER,
                angle.sin() * r + (rng.gen::<f32>() - 0.5) * RIBBON_JITTER,
            );
            TreeParticle {
                position,
                size: RIBBON_SIZE,
                color: RIBBON_COLOR,
            }
        })
        .collect()
}

/// Whole-tree response to the gesture input: yaw follows the rotation
/// input at full magnitude in every mode, the scale breathes out a little
/// when the photos scatter, and the ribbon spins on its own.
pub struct TreeMotion {
    pub yaw: f32,
    pub scale: f32,
    pub ribbon_yaw: f32,
}

impl Default for TreeMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeMotion {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            scale: 1.0,
            ribbon_yaw: 0.0,
        }
    }

    pub fn step(&mut self, mode: TreeMode, rotation_input: f32) {
        self.yaw += (rotation_input - self.yaw) * TREE_YAW_BLEND;
        let target_scale = match mode {
            TreeMode::Scattered => TREE_SCALE_SCATTERED,
            TreeMode::Clustered => TREE_SCALE_CLUSTERED,
        };
        self.scale += (target_scale - self.scale) * TREE_SCALE_BLEND;
        self.ribbon_yaw += RIBBON_SPIN_PER_TICK;
    }

    /// Strobe factor for the ribbon alpha at `elapsed` seconds.
    pub fn ribbon_glow(elapsed: f32) -> f32 {
        RIBBON_GLOW_BASE + (elapsed * RIBBON_GLOW_RATE).sin().powi(2) * RIBBON_GLOW_SPAN
    }
}
