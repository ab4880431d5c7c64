use glam::{Mat4, Quat, Vec3};

use super::constants::{
    CAMERA_FOVY_RADIANS, CAMERA_FRAME_BLEND, CAMERA_FRAME_DISTANCE, CAMERA_REST_BLEND,
    CAMERA_REST_EYE, CAMERA_REST_LOOK, CAMERA_ZFAR, CAMERA_ZNEAR,
};

// Camera with two phases: free flight around the tree, and framing the
// focused photo. The phase is decided per tick from the focus handed in
// by the frame loop; the exponential pursuit does the visual smoothing,
// so no transition state exists.

pub struct CameraRig {
    pub eye: Vec3,
    pub look: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            eye: CAMERA_REST_EYE,
            look: CAMERA_REST_LOOK,
        }
    }

    /// One tick. `focus` is the focused panel's world position and
    /// rotation, if any. `orbit_active` reports a live pointer drag so the
    /// rest easing does not fight the user's hand; it is ignored while
    /// framing, where orbit input is disabled outright.
    pub fn step(&mut self, focus: Option<(Vec3, Quat)>, orbit_active: bool) {
        match focus {
            Some((pos, rot)) => {
                // Hold position in front of the panel's face.
                let forward = rot * Vec3::Z;
                let want_eye = pos + forward * CAMERA_FRAME_DISTANCE;
                self.eye = self.eye.lerp(want_eye, CAMERA_FRAME_BLEND);
                self.look = self.look.lerp(pos, CAMERA_FRAME_BLEND);
            }
            None if orbit_active => {}
            None => {
                self.eye = self.eye.lerp(CAMERA_REST_EYE, CAMERA_REST_BLEND);
                self.look = self.look.lerp(CAMERA_REST_LOOK, CAMERA_REST_BLEND);
            }
        }
    }

    /// Rotate the eye around the current look target. `d_pitch` raises or
    /// lowers the polar angle, clamped to keep the camera above the floor
    /// and off the vertical axis.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32, max_polar: f32) {
        let offset = self.eye - self.look;
        let radius = offset.length();
        if radius < 1e-4 {
            return;
        }
        let mut yaw = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        yaw += d_yaw;
        polar = (polar + d_pitch).clamp(0.05, max_polar);
        self.eye = self.look
            + Vec3::new(
                radius * polar.sin() * yaw.sin(),
                radius * polar.cos(),
                radius * polar.sin() * yaw.cos(),
            );
    }

    /// Scale the eye distance by `factor`, clamped to `[min_dist, max_dist]`.
    pub fn zoom(&mut self, factor: f32, min_dist: f32, max_dist: f32) {
        let offset = self.eye - self.look;
        let radius = offset.length();
        if radius < 1e-4 {
            return;
        }
        let next = (radius * factor).clamp(min_dist, max_dist);
        self.eye = self.look + offset * (next / radius);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect.max(1e-4), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
