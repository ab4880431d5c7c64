#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::{
    CAMERA_BUTTON_ID, CLEAR_FOCUS_ID, MUSIC_BUTTON_ID, TREE_SEED, WISH_BUTTON_ID, WISH_DISMISS_ID,
};
use crate::core::gesture::Gesture;
use crate::core::layout;
use crate::core::motion::PhotoMotion;
use crate::core::rig::CameraRig;
use crate::core::scene::SceneState;
use crate::core::tree::{self, TreeMotion};

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod persist;
mod render;
mod upload;
mod vision;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_overlay_buttons(
    document: &web::Document,
    scene: &Rc<RefCell<SceneState>>,
    music: &Rc<audio::MusicPlayer>,
    hand: &Rc<vision::HandInput>,
) {
    let scene_cam = scene.clone();
    let hand_cam = hand.clone();
    let doc_cam = document.clone();
    dom::add_click_listener(document, CAMERA_BUTTON_ID, move || {
        vision::toggle(hand_cam.clone(), scene_cam.clone(), doc_cam.clone());
    });

    let scene_music = scene.clone();
    let music_btn = music.clone();
    let doc_music = document.clone();
    dom::add_click_listener(document, MUSIC_BUTTON_ID, move || {
        audio::toggle(music_btn.clone(), scene_music.clone(), doc_music.clone());
    });

    let scene_wish = scene.clone();
    let doc_wish = document.clone();
    dom::add_click_listener(document, WISH_BUTTON_ID, move || {
        let wish = events::keyboard::wish_for_roll(js_sys::Math::random());
        scene_wish.borrow_mut().set_wish(Some(wish));
        overlay::show_wish(&doc_wish, wish);
    });

    let scene_dismiss = scene.clone();
    let doc_dismiss = document.clone();
    dom::add_click_listener(document, WISH_DISMISS_ID, move || {
        scene_dismiss.borrow_mut().set_wish(None);
        overlay::hide_wish(&doc_dismiss);
    });

    let scene_clear = scene.clone();
    let doc_clear = document.clone();
    dom::add_click_listener(document, CLEAR_FOCUS_ID, move || {
        scene_clear.borrow_mut().set_focused(None);
        overlay::set_focus_chrome(&doc_clear, false);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wishtree starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::scene_canvas(&document)?;

    wire_canvas_resize(&canvas);

    // Gallery from storage; first run gets the seed photos
    let photos = persist::load_photos();
    log::info!("[scene] restored {} photo(s)", photos.len());
    let scene = Rc::new(RefCell::new(SceneState::new(photos)));
    let motion = Rc::new(RefCell::new(PhotoMotion::new()));
    let rig = Rc::new(RefCell::new(CameraRig::new()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let hand = vision::HandInput::new();
    let music = Rc::new(audio::MusicPlayer::new()?);

    overlay::set_photo_count(&document, scene.borrow().photo_count());
    overlay::set_music_button(&document, false);
    overlay::set_gesture_label(&document, Gesture::None);
    overlay::set_focus_chrome(&document, false);

    upload::wire_photo_input(&document, scene.clone());
    wire_overlay_buttons(&document, &scene, &music, &hand);
    events::wire_global_keydown(
        scene.clone(),
        music.clone(),
        hand.clone(),
        canvas.clone(),
        document.clone(),
    );
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        scene: scene.clone(),
        motion: motion.clone(),
        rig: rig.clone(),
        pointer: pointer.clone(),
    });

    let clouds = tree::generate(TREE_SEED);
    let gpu = frame::init_gpu(&canvas, &clouds).await;

    let targets = layout::photo_targets(scene.borrow().photo_count());
    let layout_revision = scene.borrow().revision();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        motion,
        rig,
        pointer,
        tree: TreeMotion::new(),
        canvas,
        gpu,
        targets,
        layout_revision,
        started_at: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
