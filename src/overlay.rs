use web_sys as web;

use crate::constants::{
    CAMERA_BUTTON_ID, CLEAR_FOCUS_ID, FOCUS_CAPTION, FOCUS_CAPTION_ID, GESTURE_LABEL_FIST,
    GESTURE_LABEL_ID, GESTURE_LABEL_IDLE, GESTURE_LABEL_PALM, MUSIC_BUTTON_ID, PHOTO_COUNT_ID,
    WISH_CARD_ID, WISH_TEXT_ID,
};
use crate::core::constants::MAX_PHOTOS;
use crate::core::gesture::Gesture;

fn show_el(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

fn hide_el(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_gesture_label(document: &web::Document, gesture: Gesture) {
    if let Some(el) = document.get_element_by_id(GESTURE_LABEL_ID) {
        let label = match gesture {
            Gesture::Palm => GESTURE_LABEL_PALM,
            Gesture::Fist => GESTURE_LABEL_FIST,
            Gesture::None => GESTURE_LABEL_IDLE,
        };
        el.set_text_content(Some(label));
    }
}

#[inline]
pub fn set_photo_count(document: &web::Document, count: usize) {
    if let Some(el) = document.get_element_by_id(PHOTO_COUNT_ID) {
        el.set_text_content(Some(&format!("{}/{}", count, MAX_PHOTOS)));
    }
}

pub fn show_wish(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(WISH_TEXT_ID) {
        el.set_text_content(Some(text));
    }
    show_el(document, WISH_CARD_ID);
}

#[inline]
pub fn hide_wish(document: &web::Document) {
    hide_el(document, WISH_CARD_ID);
}

#[inline]
pub fn set_camera_active(document: &web::Document, active: bool) {
    if let Some(el) = document.get_element_by_id(CAMERA_BUTTON_ID) {
        let cl = el.class_list();
        if active {
            _ = cl.add_1("active");
        } else {
            _ = cl.remove_1("active");
        }
    }
}

#[inline]
pub fn set_music_button(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id(MUSIC_BUTTON_ID) {
        el.set_text_content(Some(if playing { "⏸" } else { "▶" }));
    }
}

/// Focus chrome: the caption under the focused photo and the
/// return-to-tree button share visibility.
pub fn set_focus_chrome(document: &web::Document, focused: bool) {
    if focused {
        if let Some(el) = document.get_element_by_id(FOCUS_CAPTION_ID) {
            el.set_text_content(Some(FOCUS_CAPTION));
        }
        show_el(document, FOCUS_CAPTION_ID);
        show_el(document, CLEAR_FOCUS_ID);
    } else {
        hide_el(document, FOCUS_CAPTION_ID);
        hide_el(document, CLEAR_FOCUS_ID);
    }
}
