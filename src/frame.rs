use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CLICK_SLOP_PX, PANEL_ACCENTS, PANEL_FRAME_SIZE};
use crate::core::constants::MAX_PHOTOS;
use crate::core::layout::{self, PhotoTargets};
use crate::core::motion::{MotionFrame, PhotoMotion};
use crate::core::rig::CameraRig;
use crate::core::scene::SceneState;
use crate::core::tree::{TreeClouds, TreeMotion};
use crate::input;
use crate::render;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub motion: Rc<RefCell<PhotoMotion>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub tree: TreeMotion,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    // Photo slot layout is pure in the photo count; recomputed only when
    // the gallery revision moves.
    pub targets: Vec<PhotoTargets>,
    pub layout_revision: u64,

    pub started_at: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = (Instant::now() - self.started_at).as_secs_f32();

        let scene = self.scene.borrow();
        if scene.revision() != self.layout_revision || self.targets.len() != scene.photo_count() {
            self.targets = layout::photo_targets(scene.photo_count());
            self.layout_revision = scene.revision();
        }
        let focused_idx = scene.focused_index();
        let hovered_idx = scene.hovered_index();
        let mode = scene.mode();
        let rotation_input = scene.rotation_input();

        // The rig still holds last tick's pose here; panels react to where
        // the camera was, the rig then follows where they went.
        let cam_eye = self.rig.borrow().eye;
        {
            let mut motion = self.motion.borrow_mut();
            motion.step(&MotionFrame {
                items: scene.photos(),
                targets: &self.targets,
                mode,
                focused: focused_idx,
                hovered: hovered_idx,
                rotation_input,
                camera_eye: cam_eye,
            });
        }

        let motion = self.motion.borrow();
        let focus_pose = focused_idx
            .and_then(|i| Some((motion.world_position(i)?, motion.world_rotation(i)?)));
        let orbit_active = {
            let ps = self.pointer.borrow();
            focused_idx.is_none() && ps.down && ps.travel > CLICK_SLOP_PX
        };
        self.rig.borrow_mut().step(focus_pose, orbit_active);

        self.tree.step(mode, rotation_input);

        let mut panels: Vec<render::PanelInstance> = Vec::with_capacity(motion.ids().len());
        for (i, id) in motion.ids().iter().enumerate() {
            let (Some(pos), Some(rot)) = (motion.world_position(i), motion.world_rotation(i))
            else {
                continue;
            };
            let t = motion.transforms()[i];
            let focused = focused_idx == Some(i);
            let hovered = hovered_idx == Some(i);
            panels.push(render::PanelInstance {
                pos: pos.to_array(),
                _pad: 0.0,
                rot: rot.to_array(),
                scale: [t.scale.x * PANEL_FRAME_SIZE, t.scale.y * PANEL_FRAME_SIZE],
                params: [
                    if focused || hovered { 1.0 } else { 0.0 },
                    if focused { 1.0 } else { 0.0 },
                ],
                tint: accent_for(id),
            });
        }
        // Alpha blending draws in list order; the focused panel goes last
        // so nothing overlaps it.
        if let Some(fi) = focused_idx {
            if fi < panels.len() {
                let p = panels.remove(fi);
                panels.push(p);
            }
        }

        if let Some(g) = &mut self.gpu {
            {
                let rig = self.rig.borrow();
                g.set_camera(rig.eye, rig.look);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let pose = render::TreePose {
                yaw: self.tree.yaw,
                scale: self.tree.scale,
                ribbon_yaw: self.tree.ribbon_yaw,
                ribbon_glow: TreeMotion::ribbon_glow(elapsed),
            };
            if let Err(e) = g.render(pose, &panels) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    clouds: &TreeClouds,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, clouds, MAX_PHOTOS).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
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

fn accent_for(id: &str) -> [f32; 4] {
    let hash = id
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
    let c = PANEL_ACCENTS[(hash as usize) % PANEL_ACCENTS.len()];
    [c[0], c[1], c[2], 1.0]
}
