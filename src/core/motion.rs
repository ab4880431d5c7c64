use glam::{Mat3, Quat, Vec3};

use super::constants::{
    DIST_COMP_MAX, DIST_COMP_MIN, DIST_COMP_NUMERATOR, FOCUS_PUSH_OUT, GROUP_YAW_BLEND,
    GROUP_YAW_SCATTER_DAMP, HOVER_SCALE_BOOST, POS_BLEND, POS_BLEND_FOCUSED, SCALE_BLEND,
    SCALE_CLUSTERED, SCALE_FOCUSED, SCALE_SCATTERED, SCATTER_LOOK_POINT, WORLD_OFFSET,
};
use super::gallery::PhotoItem;
use super::layout::PhotoTargets;
use super::scene::TreeMode;

// Per-tick animation of every photo panel. Positions and rotations are
// kept in the photo group's local frame; the group yaw plus WORLD_OFFSET
// take them to world space.

/// Continuously evolving transform for one panel. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoTransform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Quat,
}

impl PhotoTransform {
    // Fresh panels start at the group origin and ease out to their slot.
    fn spawn() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Everything the driver reads for one tick. `camera_eye` is the rig's
/// world-space eye from the previous tick; `targets` is index-aligned
/// with `items`.
pub struct MotionFrame<'a> {
    pub items: &'a [PhotoItem],
    pub targets: &'a [PhotoTargets],
    pub mode: TreeMode,
    pub focused: Option<usize>,
    pub hovered: Option<usize>,
    pub rotation_input: f32,
    pub camera_eye: Vec3,
}

/// Owns the live transforms and the collection's shared yaw.
pub struct PhotoMotion {
    ids: Vec<String>,
    transforms: Vec<PhotoTransform>,
    group_yaw: f32,
}

impl Default for PhotoMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoMotion {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            transforms: Vec::new(),
            group_yaw: 0.0,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn transforms(&self) -> &[PhotoTransform] {
        &self.transforms
    }

    pub fn group_yaw(&self) -> f32 {
        self.group_yaw
    }

    pub fn world_position(&self, index: usize) -> Option<Vec3> {
        let t = self.transforms.get(index)?;
        Some(Quat::from_rotation_y(self.group_yaw) * t.position + WORLD_OFFSET)
    }

    pub fn world_rotation(&self, index: usize) -> Option<Quat> {
        let t = self.transforms.get(index)?;
        Some(Quat::from_rotation_y(self.group_yaw) * t.rotation)
    }

    /// Advance every panel one tick, then ease the group yaw.
    pub fn step(&mut self, frame: &MotionFrame) {
        self.sync(frame.items);

        // A focused panel owns all emphasis; hover is ignored meanwhile.
        let hovered = if frame.focused.is_some() {
            None
        } else {
            frame.hovered
        };

        let group_rot = Quat::from_rotation_y(self.group_yaw);
        let n = self.transforms.len().min(frame.targets.len());
        for i in 0..n {
            let targets = &frame.targets[i];
            let focused = frame.focused == Some(i);

            let mut target = match frame.mode {
                TreeMode::Clustered => targets.clustered,
                TreeMode::Scattered => targets.scattered,
            };
            // Pull the focused photo clear of the tree body; the scattered
            // fan is already far out.
            if focused && frame.mode == TreeMode::Clustered {
                target += target.normalize_or_zero() * FOCUS_PUSH_OUT;
            }

            let t = &mut self.transforms[i];
            let pos_blend = if focused { POS_BLEND_FOCUSED } else { POS_BLEND };
            t.position = t.position.lerp(target, pos_blend);

            let world_pos = group_rot * t.position + WORLD_OFFSET;
            let dist = frame.camera_eye.distance(world_pos);

            let mut base = match frame.mode {
                TreeMode::Clustered => SCALE_CLUSTERED,
                TreeMode::Scattered => SCALE_SCATTERED,
            };
            if focused {
                base = SCALE_FOCUSED;
            } else if hovered == Some(i) {
                base *= HOVER_SCALE_BOOST;
            }
            // Perspective compensation keeps distant panels readable; the
            // focused panel is sized absolutely.
            let dist_scale = (DIST_COMP_NUMERATOR / dist).clamp(DIST_COMP_MIN, DIST_COMP_MAX);
            let final_scale = if focused { base } else { base * dist_scale };
            t.scale = t.scale.lerp(Vec3::new(final_scale, final_scale, 1.0), SCALE_BLEND);

            t.rotation = if focused {
                // Snap to the camera each tick; the position blend supplies
                // the visual smoothing.
                let local_eye = group_rot.inverse() * (frame.camera_eye - WORLD_OFFSET);
                face_toward(t.position, local_eye)
            } else {
                let look_at = match frame.mode {
                    TreeMode::Clustered => Vec3::new(0.0, t.position.y, 0.0),
                    TreeMode::Scattered => SCATTER_LOOK_POINT,
                };
                // Face the reference point, then flip so the front side
                // points outward.
                face_toward(t.position, look_at) * Quat::from_rotation_y(std::f32::consts::PI)
            };
        }

        if frame.focused.is_none() {
            let damp = match frame.mode {
                TreeMode::Clustered => 1.0,
                TreeMode::Scattered => GROUP_YAW_SCATTER_DAMP,
            };
            let target_yaw = frame.rotation_input * damp;
            self.group_yaw += (target_yaw - self.group_yaw) * GROUP_YAW_BLEND;
        }
    }

    // Re-align transforms with the photo list by id so survivors keep their
    // in-flight motion when items are added or removed.
    fn sync(&mut self, items: &[PhotoItem]) {
        if self.ids.len() == items.len() && self.ids.iter().zip(items).all(|(a, b)| *a == b.id) {
            return;
        }
        let old: Vec<(String, PhotoTransform)> = self
            .ids
            .drain(..)
            .zip(self.transforms.drain(..))
            .collect();
        for item in items {
            let carried = old
                .iter()
                .find(|(id, _)| *id == item.id)
                .map(|(_, t)| *t)
                .unwrap_or_else(PhotoTransform::spawn);
            self.ids.push(item.id.clone());
            self.transforms.push(carried);
        }
    }
}

/// Orientation that points an object's local +Z at `to` from `from`,
/// keeping its local Y as close to world up as the direction allows.
fn face_toward(from: Vec3, to: Vec3) -> Quat {
    let forward = to - from;
    if forward.length_squared() < 1e-12 {
        return Quat::IDENTITY;
    }
    let forward = forward.normalize();
    let mut right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-12 {
        // Looking straight up or down; any horizontal axis serves.
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
