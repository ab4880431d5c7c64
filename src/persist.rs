use web_sys as web;

use crate::constants::STORAGE_KEY;
use crate::core::constants::MAX_PHOTOS;
use crate::core::gallery::{self, PhotoItem};

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Stored gallery, or the seed photos when nothing usable is present.
/// A corrupt entry is logged and replaced rather than propagated.
pub fn load_photos() -> Vec<PhotoItem> {
    let Some(storage) = storage() else {
        return gallery::default_photos();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => match gallery::decode(&raw) {
            Ok(mut items) => {
                // Tampered entries never grow the gallery past its cap
                items.truncate(MAX_PHOTOS);
                items
            }
            Err(e) => {
                log::warn!("[persist] corrupt photo list, reseeding: {}", e);
                gallery::default_photos()
            }
        },
        _ => gallery::default_photos(),
    }
}

pub fn save_photos(items: &[PhotoItem]) {
    let Some(storage) = storage() else { return };
    match gallery::encode(items) {
        Ok(raw) => {
            // Quota overflow (huge data URLs) loses persistence, not the session
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                log::warn!("[persist] save failed, photos kept in memory only");
            }
        }
        Err(e) => log::warn!("[persist] encode failed: {}", e),
    }
}
