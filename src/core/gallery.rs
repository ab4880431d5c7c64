use serde::{Deserialize, Serialize};

// Photo list operations and the persisted JSON shape.

/// One photo on the tree. `url` is an http or data URL; ids are opaque and
/// stable for the life of the item. List order drives the layout index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoItem {
    pub id: String,
    pub url: String,
}

impl PhotoItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { id: id.into(), url: url.into() }
    }
}

/// Seed list shown before any upload and whenever stored data is unusable.
pub fn default_photos() -> Vec<PhotoItem> {
    (1..=4)
        .map(|n| {
            PhotoItem::new(
                n.to_string(),
                format!("https://picsum.photos/400/600?random={n}"),
            )
        })
        .collect()
}

/// Append `incoming` while keeping the list within `cap` items. The combined
/// list is truncated from the tail, so retained items keep their original
/// order and new items beyond the remaining capacity are dropped.
pub fn merge_capped(
    existing: &[PhotoItem],
    incoming: impl IntoIterator<Item = PhotoItem>,
    cap: usize,
) -> Vec<PhotoItem> {
    let mut merged: Vec<PhotoItem> = existing.to_vec();
    merged.extend(incoming);
    merged.truncate(cap);
    merged
}

/// Remove the photo with `id`, reporting whether anything was removed.
pub fn remove_by_id(photos: &mut Vec<PhotoItem>, id: &str) -> bool {
    let before = photos.len();
    photos.retain(|p| p.id != id);
    photos.len() != before
}

pub fn encode(photos: &[PhotoItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(photos)
}

pub fn decode(raw: &str) -> Result<Vec<PhotoItem>, serde_json::Error> {
    serde_json::from_str(raw)
}
