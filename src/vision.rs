use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::DETECTOR_HOOK_NAME;
use crate::core::gesture::{self, Gesture};
use crate::core::scene::SceneState;
use crate::overlay;

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("media devices unavailable")]
    NoMediaDevices,
    #[error("camera denied or unavailable: {0}")]
    Denied(String),
    #[error("video element: {0}")]
    Video(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CameraPhase {
    Off,
    Starting,
    Live,
    Failed,
}

/// Webcam hand input. The landmark detector itself is provided by the host
/// page as `window.handLandmarks(video)` returning a flat Float32Array of
/// x,y,z triples (or null); this side owns the camera lifecycle, the
/// sampling loop, and classification.
pub struct HandInput {
    phase: Cell<CameraPhase>,
    video: RefCell<Option<web::HtmlVideoElement>>,
    stream: RefCell<Option<web::MediaStream>>,
    // Dropping this to false ends the sampling loop at its next tick
    session: RefCell<Option<Rc<Cell<bool>>>>,
    last_gesture: Cell<Gesture>,
}

impl HandInput {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            phase: Cell::new(CameraPhase::Off),
            video: RefCell::new(None),
            stream: RefCell::new(None),
            session: RefCell::new(None),
            last_gesture: Cell::new(Gesture::None),
        })
    }

    #[inline]
    pub fn phase(&self) -> CameraPhase {
        self.phase.get()
    }
}

pub fn toggle(input: Rc<HandInput>, scene: Rc<RefCell<SceneState>>, document: web::Document) {
    match input.phase() {
        CameraPhase::Starting => {}
        CameraPhase::Live => stop(&input, &scene, &document),
        CameraPhase::Off | CameraPhase::Failed => start(input, scene, document),
    }
}

fn start(input: Rc<HandInput>, scene: Rc<RefCell<SceneState>>, document: web::Document) {
    input.phase.set(CameraPhase::Starting);
    spawn_local(async move {
        match open_camera(&document).await {
            Ok((video, stream)) => {
                *input.video.borrow_mut() = Some(video);
                *input.stream.borrow_mut() = Some(stream);
                input.phase.set(CameraPhase::Live);
                overlay::set_camera_active(&document, true);
                log::info!("[vision] camera live");
                start_sampling(input, scene, document);
            }
            Err(e) => {
                input.phase.set(CameraPhase::Failed);
                overlay::set_camera_active(&document, false);
                log::warn!("[vision] camera start failed: {}", e);
            }
        }
    });
}

async fn open_camera(
    document: &web::Document,
) -> Result<(web::HtmlVideoElement, web::MediaStream), CameraError> {
    let window = web::window().ok_or(CameraError::NoMediaDevices)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CameraError::NoMediaDevices)?;

    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Denied(format!("{:?}", e)))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| CameraError::Denied(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| CameraError::Denied(format!("{:?}", e)))?;

    // Detached video element; the detector reads frames from it directly
    let video: web::HtmlVideoElement = document
        .create_element("video")
        .map_err(|e| CameraError::Video(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| CameraError::Video(format!("{:?}", e)))?;
    video.set_muted(true);
    video.set_plays_inline(true);
    video.set_src_object(Some(&stream));
    _ = video.play();

    Ok((video, stream))
}

fn start_sampling(
    input: Rc<HandInput>,
    scene: Rc<RefCell<SceneState>>,
    document: web::Document,
) {
    let alive = Rc::new(Cell::new(true));
    *input.session.borrow_mut() = Some(alive.clone());

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive.get() {
            // Ended session: stop without rescheduling
            return;
        }
        sample_once(&input, &scene, &document);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn sample_once(input: &Rc<HandInput>, scene: &Rc<RefCell<SceneState>>, document: &web::Document) {
    let sample = {
        let video_ref = input.video.borrow();
        let Some(video) = video_ref.as_ref() else {
            return;
        };
        detect_landmarks(video)
            .and_then(|flat| gesture::classify(&gesture::landmarks_from_flat(&flat)))
    };
    gesture::apply(&mut scene.borrow_mut(), sample);

    let current = scene.borrow().gesture();
    if current != input.last_gesture.get() {
        input.last_gesture.set(current);
        overlay::set_gesture_label(document, current);
    }
}

// window.handLandmarks(video) -> Float32Array | null
fn detect_landmarks(video: &web::HtmlVideoElement) -> Option<Vec<f32>> {
    let window = web::window()?;
    let hook = js_sys::Reflect::get(&window, &JsValue::from_str(DETECTOR_HOOK_NAME))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let result = hook.call1(&JsValue::NULL, video.as_ref()).ok()?;
    if result.is_null() || result.is_undefined() {
        return None;
    }
    let flat = result.dyn_into::<js_sys::Float32Array>().ok()?;
    Some(flat.to_vec())
}

pub fn stop(input: &Rc<HandInput>, scene: &Rc<RefCell<SceneState>>, document: &web::Document) {
    if let Some(flag) = input.session.borrow_mut().take() {
        flag.set(false);
    }
    if let Some(stream) = input.stream.borrow_mut().take() {
        // getTracks() returns live tracks; each must be stopped to release
        // the camera indicator
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
    if let Some(video) = input.video.borrow_mut().take() {
        _ = video.pause();
        video.set_src_object(None);
    }
    input.phase.set(CameraPhase::Off);
    input.last_gesture.set(Gesture::None);

    gesture::apply(&mut scene.borrow_mut(), None);
    overlay::set_gesture_label(document, Gesture::None);
    overlay::set_camera_active(document, false);
    log::info!("[vision] camera off");
}
