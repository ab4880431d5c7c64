/// Web-layer tuning: DOM contract, persistence key, content URLs, and
/// interaction constants that have no meaning outside the browser glue.
// localStorage key for the persisted photo list
pub const STORAGE_KEY: &str = "christmas_tree_photos";

// Element ids the host page must provide
pub const CANVAS_ID: &str = "scene-canvas";
pub const PHOTO_INPUT_ID: &str = "photo-input";
pub const MUSIC_BUTTON_ID: &str = "music-toggle";
pub const CAMERA_BUTTON_ID: &str = "camera-toggle";
pub const WISH_BUTTON_ID: &str = "wish-button";
pub const WISH_CARD_ID: &str = "wish-card";
pub const WISH_TEXT_ID: &str = "wish-text";
pub const WISH_DISMISS_ID: &str = "wish-dismiss";
pub const GESTURE_LABEL_ID: &str = "gesture-label";
pub const PHOTO_COUNT_ID: &str = "photo-count";
pub const CLEAR_FOCUS_ID: &str = "clear-focus";
pub const FOCUS_CAPTION_ID: &str = "focus-caption";

// Overlay copy
pub const GESTURE_LABEL_PALM: &str = "👐 散开树体";
pub const GESTURE_LABEL_FIST: &str = "✊ 聚拢树体";
pub const GESTURE_LABEL_IDLE: &str = "👋 等待手势";
pub const FOCUS_CAPTION: &str = "这段记忆，永远留在圣诞树上";

// Page-global detector hook: fn(video: HTMLVideoElement) -> Float32Array | null
pub const DETECTOR_HOOK_NAME: &str = "handLandmarks";

// Background music
pub const MUSIC_URL: &str = "https://cdn.pixabay.com/audio/2023/11/24/audio_9875e0325f.mp3";
pub const MUSIC_TITLE: &str = "Christmas Spirit (Soft Piano)";

// Blessing strings for the wish card
pub const WISHES: [&str; 8] = [
    "愿你的世界，如冬日暖阳般明媚。",
    "平安喜乐，万事胜意，圣诞快乐！",
    "每一片雪花，都是我对你最温柔的祝福。",
    "愿你在这个温暖的节日里，拥抱所有的美好。",
    "祝你所得皆所愿，所行皆坦途。",
    "生活虽忙，别忘了在这洁白的节日里奖励自己一个拥抱。",
    "愿圣诞老人把最好的礼物，悄悄放进你的梦里。",
    "星光漫天，不如你眼中那一抹温柔。",
];

// Picking: panel bounding-sphere radius per unit of panel scale
pub const PICK_RADIUS_PER_SCALE: f32 = 0.62;

// Panels render a glass frame around the photo area
pub const PANEL_FRAME_SIZE: f32 = 1.12;

// Particle tree geometry is deterministic per seed
pub const TREE_SEED: u64 = 7;

// Placeholder interiors tint each panel by a stable hash of its id
pub const PANEL_ACCENTS: [[f32; 3]; 8] = [
    [0.86, 0.49, 0.42],
    [0.93, 0.73, 0.47],
    [0.55, 0.72, 0.52],
    [0.44, 0.62, 0.74],
    [0.63, 0.54, 0.75],
    [0.84, 0.58, 0.69],
    [0.49, 0.70, 0.68],
    [0.78, 0.70, 0.54],
];

// Orbit input (free camera only)
pub const ORBIT_YAW_PER_PX: f32 = 0.005;
pub const ORBIT_PITCH_PER_PX: f32 = 0.005;
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 1.7;
// Fractional change in eye distance per wheel notch
pub const ORBIT_ZOOM_STEP: f32 = 0.08;
// Pointer travel below this many px counts as a click, not a drag
pub const CLICK_SLOP_PX: f32 = 5.0;
