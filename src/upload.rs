use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PHOTO_INPUT_ID;
use crate::core::constants::MAX_PHOTOS;
use crate::core::gallery::PhotoItem;
use crate::core::scene::SceneState;
use crate::{overlay, persist};

// Ids mirror the uploader they replace: epoch millis plus a short
// base-36 suffix, unique enough for a 20-item gallery.
fn fresh_photo_id() -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = (js_sys::Math::random() * 36f64.powi(9)) as u64;
    let mut suffix = [b'0'; 9];
    for slot in suffix.iter_mut().rev() {
        *slot = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    format!(
        "{}-{}",
        js_sys::Date::now() as u64,
        std::str::from_utf8(&suffix).unwrap_or("0")
    )
}

fn commit(scene: &Rc<RefCell<SceneState>>, document: &web::Document, items: Vec<PhotoItem>) {
    let added = items.len();
    let mut s = scene.borrow_mut();
    if s.add_photos(items) {
        persist::save_photos(s.photos());
        overlay::set_photo_count(document, s.photo_count());
        log::info!("[upload] added {} photo(s), gallery={}", added, s.photo_count());
    }
}

// One reader (or one failed slot) is accounted for; the last one in
// commits whatever arrived, preserving selection order.
fn settle_slot(
    pending: &Rc<Cell<usize>>,
    slots: &Rc<RefCell<Vec<Option<PhotoItem>>>>,
    scene: &Rc<RefCell<SceneState>>,
    document: &web::Document,
) {
    if pending.get() == 0 {
        return;
    }
    pending.set(pending.get() - 1);
    if pending.get() == 0 {
        let items: Vec<PhotoItem> = slots.borrow_mut().drain(..).flatten().collect();
        commit(scene, document, items);
    }
}

/// Wires the file input: each selected image is read as a data URL and
/// appended to the gallery. Selection is cut to remaining capacity before
/// any read starts, so a full gallery costs nothing.
pub fn wire_photo_input(document: &web::Document, scene: Rc<RefCell<SceneState>>) {
    let Some(input_el) = document.get_element_by_id(PHOTO_INPUT_ID) else {
        log::warn!("[upload] missing #{}", PHOTO_INPUT_ID);
        return;
    };
    let Ok(input) = input_el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("[upload] #{} is not an <input>", PHOTO_INPUT_ID);
        return;
    };

    let document = document.clone();
    let input_for_change = input.clone();
    let on_change = Closure::wrap(Box::new(move |_e: web::Event| {
        let Some(files) = input_for_change.files() else {
            return;
        };
        let remaining = MAX_PHOTOS.saturating_sub(scene.borrow().photo_count());
        let take = (files.length() as usize).min(remaining);
        if take == 0 {
            log::info!("[upload] gallery full ({} photos)", MAX_PHOTOS);
            return;
        }

        // Readers finish in arbitrary order; slots keep selection order.
        let slots: Rc<RefCell<Vec<Option<PhotoItem>>>> =
            Rc::new(RefCell::new(vec![None; take]));
        let pending = Rc::new(Cell::new(take));

        for slot in 0..take {
            let file = match files.get(slot as u32) {
                Some(f) => f,
                None => {
                    settle_slot(&pending, &slots, &scene, &document);
                    continue;
                }
            };
            let reader = match web::FileReader::new() {
                Ok(r) => r,
                Err(_) => {
                    settle_slot(&pending, &slots, &scene, &document);
                    continue;
                }
            };

            let reader_for_result = reader.clone();
            let slots_done = slots.clone();
            let pending_done = pending.clone();
            let scene_done = scene.clone();
            let document_done = document.clone();
            let onloadend = Closure::wrap(Box::new(move |_e: web::ProgressEvent| {
                if let Ok(result) = reader_for_result.result() {
                    if let Some(url) = result.as_string() {
                        slots_done.borrow_mut()[slot] =
                            Some(PhotoItem::new(fresh_photo_id(), url));
                    }
                }
                settle_slot(&pending_done, &slots_done, &scene_done, &document_done);
            }) as Box<dyn FnMut(_)>);
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();

            if reader.read_as_data_url(&file).is_err() {
                // No read started, so no loadend will fire for this slot
                log::warn!("[upload] unreadable file at slot {}", slot);
                settle_slot(&pending, &slots, &scene, &document);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
