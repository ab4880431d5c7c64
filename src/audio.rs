use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{MUSIC_TITLE, MUSIC_URL};
use crate::core::scene::SceneState;
use crate::overlay;

/// Looping background track. Browsers resolve `play()` asynchronously and
/// reject a `pause()` that lands while that promise is still pending, so
/// the in-flight promise is kept and awaited before pausing.
pub struct MusicPlayer {
    audio: web::HtmlAudioElement,
    in_flight: RefCell<Option<js_sys::Promise>>,
}

impl MusicPlayer {
    pub fn new() -> anyhow::Result<Self> {
        let audio = web::HtmlAudioElement::new_with_src(MUSIC_URL)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        audio.set_loop(true);
        audio.set_preload("auto");
        log::info!("[music] ready: {}", MUSIC_TITLE);
        Ok(Self {
            audio,
            in_flight: RefCell::new(None),
        })
    }
}

pub fn toggle(
    player: Rc<MusicPlayer>,
    scene: Rc<RefCell<SceneState>>,
    document: web::Document,
) {
    spawn_local(async move {
        if scene.borrow().music_playing() {
            let pending = player.in_flight.borrow_mut().take();
            if let Some(p) = pending {
                _ = JsFuture::from(p).await;
            }
            _ = player.audio.pause();
            scene.borrow_mut().set_music_playing(false);
        } else {
            let started = match player.audio.play() {
                Ok(promise) => {
                    *player.in_flight.borrow_mut() = Some(promise.clone());
                    let ok = JsFuture::from(promise).await.is_ok();
                    *player.in_flight.borrow_mut() = None;
                    ok
                }
                Err(_) => false,
            };
            if !started {
                // Autoplay policy or network failure; stay paused
                log::warn!("[music] playback failed");
            }
            scene.borrow_mut().set_music_playing(started);
        }
        overlay::set_music_button(&document, scene.borrow().music_playing());
    });
}
