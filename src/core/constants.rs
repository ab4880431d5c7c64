use glam::Vec3;

// Shared tuning for the layout/animation core.
//
// Every *_BLEND factor below is applied once per render tick and was tuned
// against the browser's ~60 Hz requestAnimationFrame cadence. They are
// per-tick coefficients, not time-scaled decay rates; keep that in mind if
// the tick source ever changes.

// Photo list cap
pub const MAX_PHOTOS: usize = 20;

// Position easing
pub const POS_BLEND_FOCUSED: f32 = 0.15;
pub const POS_BLEND: f32 = 0.08;

// Scale selection and easing
pub const SCALE_CLUSTERED: f32 = 1.0;
pub const SCALE_SCATTERED: f32 = 1.6;
pub const SCALE_FOCUSED: f32 = 6.0;
pub const HOVER_SCALE_BOOST: f32 = 1.3;
pub const SCALE_BLEND: f32 = 0.1;

// Distance compensation keeps far panels readable (non-focused only)
pub const DIST_COMP_NUMERATOR: f32 = 14.0;
pub const DIST_COMP_MIN: f32 = 0.5;
pub const DIST_COMP_MAX: f32 = 3.0;

// A focused panel is pushed clear of the tree body in clustered mode
pub const FOCUS_PUSH_OUT: f32 = 1.5;

// Group yaw easing toward the gesture rotation input
pub const GROUP_YAW_BLEND: f32 = 0.05;
pub const GROUP_YAW_SCATTER_DAMP: f32 = 0.4;

// Look-at point shared by every unfocused panel in the scattered fan
pub const SCATTER_LOOK_POINT: Vec3 = Vec3::new(0.0, 2.5, 0.0);

// Camera rig poses and easing
pub const CAMERA_REST_EYE: Vec3 = Vec3::new(0.0, 2.0, 16.0);
pub const CAMERA_REST_LOOK: Vec3 = Vec3::ZERO;
pub const CAMERA_REST_BLEND: f32 = 0.05;
pub const CAMERA_FRAME_BLEND: f32 = 0.1;
// Eye sits this far along the focused panel's front normal
pub const CAMERA_FRAME_DISTANCE: f32 = 5.5;

// Projection shared by rendering and picking
pub const CAMERA_FOVY_RADIANS: f32 = 40.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// World-space offset applied to the whole scene (tree and photos)
pub const WORLD_OFFSET: Vec3 = Vec3::new(0.0, -2.5, 0.0);
