use super::constants::MAX_PHOTOS;
use super::gallery::{self, PhotoItem};
use super::gesture::Gesture;

/// Global photo arrangement. Never per-item; focus is an independent axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeMode {
    Clustered,
    Scattered,
}

/// The authoritative mutable state shared by the render tick, the gesture
/// loop, and the DOM handlers. All access goes through methods so the
/// focus/hover invariants hold no matter which loop performed the write;
/// consumers re-read each tick instead of caching values across frames.
#[derive(Debug)]
pub struct SceneState {
    photos: Vec<PhotoItem>,
    revision: u64,
    mode: TreeMode,
    gesture: Gesture,
    rotation_input: f32,
    focused_id: Option<String>,
    hovered_id: Option<String>,
    wish: Option<&'static str>,
    music_playing: bool,
}

impl SceneState {
    pub fn new(photos: Vec<PhotoItem>) -> Self {
        Self {
            photos,
            revision: 0,
            mode: TreeMode::Clustered,
            gesture: Gesture::None,
            rotation_input: 0.0,
            focused_id: None,
            hovered_id: None,
            wish: None,
            music_playing: false,
        }
    }

    pub fn photos(&self) -> &[PhotoItem] {
        &self.photos
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Bumped on every photo-list change; the frame loop memoizes layout
    /// targets on this value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_photos(&mut self, photos: Vec<PhotoItem>) {
        self.photos = photos;
        self.photos.truncate(MAX_PHOTOS);
        self.after_photos_changed();
    }

    /// Capped append; returns true if the list changed.
    pub fn add_photos(&mut self, incoming: Vec<PhotoItem>) -> bool {
        let merged = gallery::merge_capped(&self.photos, incoming, MAX_PHOTOS);
        if merged == self.photos {
            return false;
        }
        self.photos = merged;
        self.after_photos_changed();
        true
    }

    /// Returns true if the photo existed. Focus and hover on the removed
    /// id are cleared in the same call.
    pub fn remove_photo(&mut self, id: &str) -> bool {
        if !gallery::remove_by_id(&mut self.photos, id) {
            return false;
        }
        self.after_photos_changed();
        true
    }

    fn after_photos_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        let focus_ok = self
            .focused_id
            .as_deref()
            .map_or(true, |i| self.photos.iter().any(|p| p.id == i));
        if !focus_ok {
            self.focused_id = None;
        }
        let hover_ok = self
            .hovered_id
            .as_deref()
            .map_or(true, |i| self.photos.iter().any(|p| p.id == i));
        if !hover_ok {
            self.hovered_id = None;
        }
    }

    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TreeMode) {
        self.mode = mode;
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    pub fn rotation_input(&self) -> f32 {
        self.rotation_input
    }

    pub fn set_rotation_input(&mut self, yaw: f32) {
        self.rotation_input = yaw;
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused_id.as_deref()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.index_of(self.focused_id.as_deref()?)
    }

    /// Focusing an unknown id clears focus instead of storing a dangling
    /// reference. Focusing anything dismisses hover.
    pub fn set_focused(&mut self, id: Option<String>) {
        self.focused_id = id.filter(|i| self.index_of(i).is_some());
        if self.focused_id.is_some() {
            self.hovered_id = None;
        }
    }

    /// Click semantics: focus the photo, or release it if already focused.
    pub fn toggle_focus(&mut self, id: &str) {
        if self.focused_id.as_deref() == Some(id) {
            self.set_focused(None);
        } else {
            self.set_focused(Some(id.to_string()));
        }
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.index_of(self.hovered_id.as_deref()?)
    }

    /// Hover is a no-op while a photo is focused; clearing always works.
    pub fn set_hovered(&mut self, id: Option<String>) {
        if id.is_some() && self.focused_id.is_some() {
            return;
        }
        self.hovered_id = id.filter(|i| self.index_of(i).is_some());
    }

    pub fn wish(&self) -> Option<&'static str> {
        self.wish
    }

    pub fn set_wish(&mut self, wish: Option<&'static str>) {
        self.wish = wish;
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn set_music_playing(&mut self, playing: bool) {
        self.music_playing = playing;
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.photos.iter().position(|p| p.id == id)
    }
}
