use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CLICK_SLOP_PX, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_PITCH_PER_PX,
    ORBIT_YAW_PER_PX, ORBIT_ZOOM_STEP, PICK_RADIUS_PER_SCALE,
};
use crate::core::motion::PhotoMotion;
use crate::core::rig::CameraRig;
use crate::core::scene::SceneState;
use crate::input;
use crate::{dom, overlay};

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneState>>,
    pub motion: Rc<RefCell<PhotoMotion>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

// Ray from the pointer against every live panel's bounding sphere,
// nearest hit wins. Panels are matched by the motion list, which is what
// is actually on screen this frame.
fn pick_photo(w: &PointerWiring, px: Vec2) -> Option<String> {
    let size = Vec2::new(w.canvas.width() as f32, w.canvas.height() as f32);
    let rig = w.rig.borrow();
    let aspect = size.x / size.y.max(1.0);
    let inv = rig.view_proj(aspect).inverse();
    let (origin, dir) = input::screen_ray(px, size, rig.eye, inv);
    drop(rig);

    let motion = w.motion.borrow();
    let spheres: Vec<(Vec3, f32)> = motion
        .ids()
        .iter()
        .enumerate()
        .filter_map(|(i, _)| {
            let center = motion.world_position(i)?;
            let radius = motion.transforms().get(i)?.scale.x * PICK_RADIUS_PER_SCALE;
            Some((center, radius))
        })
        .collect();
    input::pick_sphere(origin, dir, &spheres).map(|i| motion.ids()[i].clone())
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (was_down, last) = {
            let ps = w.pointer.borrow();
            (ps.down, Vec2::new(ps.x, ps.y))
        };
        {
            let mut ps = w.pointer.borrow_mut();
            ps.x = pos.x;
            ps.y = pos.y;
            if was_down {
                ps.travel += pos.distance(last);
            }
        }

        let focused = w.scene.borrow().focused_id().is_some();
        if was_down {
            // Past the click slop this is an orbit drag; the focused view
            // keeps the camera, so dragging does nothing there.
            let travel = w.pointer.borrow().travel;
            if !focused && travel > CLICK_SLOP_PX {
                let delta = pos - last;
                w.rig.borrow_mut().orbit(
                    -delta.x * ORBIT_YAW_PER_PX,
                    -delta.y * ORBIT_PITCH_PER_PX,
                    ORBIT_MAX_POLAR,
                );
            }
            return;
        }

        let hit = pick_photo(&w, pos);
        dom::set_cursor(&w.document, hit.is_some() && !focused);
        w.scene.borrow_mut().set_hovered(hit);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.x = pos.x;
            ps.y = pos.y;
            ps.down = true;
            ps.travel = 0.0;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (was_down, travel) = {
            let ps = w.pointer.borrow();
            (ps.down, ps.travel)
        };
        w.pointer.borrow_mut().down = false;
        if !was_down {
            return;
        }

        if travel <= CLICK_SLOP_PX {
            // A click re-picks rather than trusting hover, which is
            // suppressed while a photo is focused.
            let pos = input::pointer_canvas_px(&ev, &w.canvas);
            if let Some(id) = pick_photo(&w, pos) {
                let mut scene = w.scene.borrow_mut();
                scene.toggle_focus(&id);
                let focused = scene.focused_id().is_some();
                drop(scene);
                log::info!("[pointer] focus {} -> {}", id, focused);
                overlay::set_focus_chrome(&w.document, focused);
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if w.scene.borrow().focused_id().is_some() {
            return;
        }
        let factor = if ev.delta_y() > 0.0 {
            1.0 + ORBIT_ZOOM_STEP
        } else {
            1.0 / (1.0 + ORBIT_ZOOM_STEP)
        };
        w.rig
            .borrow_mut()
            .zoom(factor, ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
