use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::MusicPlayer;
use crate::constants::WISHES;
use crate::core::scene::{SceneState, TreeMode};
use crate::vision::HandInput;
use crate::{audio, overlay, persist, vision};

/// Everything a key can do; the mapping itself is pure so it can be
/// exercised without a DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMode,
    ToggleCamera,
    ToggleMusic,
    DrawWish,
    Dismiss,
    RemoveFocused,
    ToggleFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleMode),
        "c" | "C" => Some(KeyAction::ToggleCamera),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "w" | "W" => Some(KeyAction::DrawWish),
        "Escape" => Some(KeyAction::Dismiss),
        "Delete" => Some(KeyAction::RemoveFocused),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}

/// Pick a blessing from a uniform roll in `[0, 1)`.
#[inline]
pub fn wish_for_roll(roll: f64) -> &'static str {
    let idx = ((roll * WISHES.len() as f64).floor() as usize).min(WISHES.len() - 1);
    WISHES[idx]
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneState>>,
    music: &Rc<MusicPlayer>,
    hand: &Rc<HandInput>,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
) {
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    match action {
        KeyAction::ToggleMode => {
            let mut s = scene.borrow_mut();
            let next = match s.mode() {
                TreeMode::Clustered => TreeMode::Scattered,
                TreeMode::Scattered => TreeMode::Clustered,
            };
            s.set_mode(next);
            log::info!("[keys] mode={:?}", next);
            ev.prevent_default();
        }
        KeyAction::ToggleCamera => {
            vision::toggle(hand.clone(), scene.clone(), document.clone());
        }
        KeyAction::ToggleMusic => {
            audio::toggle(music.clone(), scene.clone(), document.clone());
        }
        KeyAction::DrawWish => {
            let wish = wish_for_roll(js_sys::Math::random());
            scene.borrow_mut().set_wish(Some(wish));
            overlay::show_wish(document, wish);
        }
        KeyAction::Dismiss => {
            // Focus goes first; a second Escape closes the wish card
            let mut s = scene.borrow_mut();
            if s.focused_id().is_some() {
                s.set_focused(None);
                drop(s);
                overlay::set_focus_chrome(document, false);
            } else if s.wish().is_some() {
                s.set_wish(None);
                drop(s);
                overlay::hide_wish(document);
            }
        }
        KeyAction::RemoveFocused => {
            let mut s = scene.borrow_mut();
            if let Some(id) = s.focused_id().map(str::to_owned) {
                if s.remove_photo(&id) {
                    persist::save_photos(s.photos());
                    let count = s.photo_count();
                    drop(s);
                    log::info!("[keys] removed photo {}", id);
                    overlay::set_photo_count(document, count);
                    overlay::set_focus_chrome(document, false);
                }
            }
        }
        KeyAction::ToggleFullscreen => {
            if document.fullscreen_element().is_some() {
                _ = document.exit_fullscreen();
            } else {
                _ = canvas.request_fullscreen();
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(
    scene: Rc<RefCell<SceneState>>,
    music: Rc<MusicPlayer>,
    hand: Rc<HandInput>,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                super::keyboard::handle_global_keydown(
                    &ev, &scene, &music, &hand, &canvas, &document,
                );
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
