use glam::Vec3;

// Target positions for every photo in both layout modes.
//
// Pure geometry: recomputed only when the photo list changes (the caller
// memoizes on the store's photo revision). The per-frame easing toward
// whichever side is active lives in `motion`.

// Clustered spiral: three turns wrapping the tree silhouette
const SPIRAL_ANGLE_SPAN: f32 = std::f32::consts::PI * 6.0;
const SPIRAL_HEIGHT_SPAN: f32 = 6.5;
const SPIRAL_HEIGHT_BASE: f32 = -0.8;
const SPIRAL_RADIUS_TOP: f32 = 1.2;
const SPIRAL_RADIUS_SPAN: f32 = 2.8;

// Scattered fan: fixed-column grid folded onto a spherical cap facing +Z
const SCATTER_COLS: usize = 5;
const SCATTER_PHI_SPAN: f32 = std::f32::consts::PI * 0.5;
const SCATTER_THETA_SPAN: f32 = std::f32::consts::PI * 0.3;
const SCATTER_DISTANCE: f32 = 8.5;
const SCATTER_Y_LIFT: f32 = 2.5;

/// Both target positions for one photo, in the photo group's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoTargets {
    pub clustered: Vec3,
    pub scattered: Vec3,
}

/// One entry per photo, index-aligned with the photo list.
pub fn photo_targets(count: usize) -> Vec<PhotoTargets> {
    (0..count)
        .map(|i| PhotoTargets {
            clustered: clustered_position(i, count),
            scattered: scattered_position(i, count),
        })
        .collect()
}

fn clustered_position(index: usize, count: usize) -> Vec3 {
    let t = index as f32 / (count.saturating_sub(1)).max(1) as f32;
    let angle = t * SPIRAL_ANGLE_SPAN;
    let height = t * SPIRAL_HEIGHT_SPAN + SPIRAL_HEIGHT_BASE;
    let radius = (1.0 - t) * SPIRAL_RADIUS_SPAN + SPIRAL_RADIUS_TOP;
    Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
}

fn scattered_position(index: usize, count: usize) -> Vec3 {
    let col = index % SCATTER_COLS;
    let row = index / SCATTER_COLS;
    let total_rows = count.div_ceil(SCATTER_COLS);

    let col_f = grid_fraction(col, SCATTER_COLS);
    let row_f = grid_fraction(row, total_rows);

    let phi = (col_f - 0.5) * SCATTER_PHI_SPAN;
    let theta = (row_f - 0.5) * SCATTER_THETA_SPAN;
    Vec3::new(
        phi.sin() * theta.cos() * SCATTER_DISTANCE,
        theta.sin() * SCATTER_DISTANCE + SCATTER_Y_LIFT,
        phi.cos() * theta.cos() * SCATTER_DISTANCE,
    )
}

// A single row or column has no span to spread across.
fn grid_fraction(slot: usize, total: usize) -> f32 {
    if total > 1 {
        slot as f32 / (total - 1) as f32
    } else {
        0.0
    }
}
