pub mod constants;
pub mod gallery;
pub mod gesture;
pub mod layout;
pub mod motion;
pub mod rig;
pub mod scene;
pub mod tree;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
