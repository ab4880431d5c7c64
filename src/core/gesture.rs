use super::scene::{SceneState, TreeMode};

// Hand-landmark classification. One hand per frame at most; the detector
// model itself lives outside the crate (see `vision`).

pub const WRIST: usize = 0;
pub const INDEX_TIP: usize = 8;

// Fist/palm split on the wrist-to-index-tip vertical spread
const FIST_Y_SPREAD: f32 = 0.3;

/// Discrete hand pose derived from one detection frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    None,
    Fist,
    Palm,
}

/// One landmark in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One classified frame: the discrete pose plus the continuous yaw input
/// derived from the palm-base horizontal position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub gesture: Gesture,
    pub rotation_y: f32,
}

/// Decode the detector hook's flat `[x0, y0, z0, x1, y1, z1, ..]` buffer.
pub fn landmarks_from_flat(data: &[f32]) -> Vec<Landmark> {
    data.chunks_exact(3)
        .map(|c| Landmark { x: c[0], y: c[1], z: c[2] })
        .collect()
}

/// Returns `None` when the frame has no usable hand (missing landmarks).
/// A small vertical spread means curled fingers, so a fist; the boundary
/// value itself reads as an open palm.
pub fn classify(landmarks: &[Landmark]) -> Option<GestureSample> {
    let wrist = landmarks.get(WRIST)?;
    let index_tip = landmarks.get(INDEX_TIP)?;

    let y_spread = (index_tip.y - wrist.y).abs();
    let gesture = if y_spread < FIST_Y_SPREAD {
        Gesture::Fist
    } else {
        Gesture::Palm
    };
    // Palm-base x in [0, 1] maps linearly onto a full turn, centered at 0
    let rotation_y = (wrist.x - 0.5) * std::f32::consts::TAU;
    Some(GestureSample { gesture, rotation_y })
}

/// Write one frame's classification into the store. Losing the hand only
/// downgrades the gesture display; the layout mode stays sticky and the
/// rotation input keeps its last value.
pub fn apply(scene: &mut SceneState, sample: Option<GestureSample>) {
    match sample {
        Some(s) => {
            scene.set_gesture(s.gesture);
            match s.gesture {
                Gesture::Fist => scene.set_mode(TreeMode::Clustered),
                Gesture::Palm => scene.set_mode(TreeMode::Scattered),
                Gesture::None => {}
            }
            scene.set_rotation_input(s.rotation_y);
        }
        None => scene.set_gesture(Gesture::None),
    }
}
