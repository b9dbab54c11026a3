use crate::constants::MAX_FRAME_DT_SEC;
use crate::controller::Controller;
use crate::core::{Input, OrbitCamera, ParticleField, Rotation, SolidMesh, HEART_SCALE};
use crate::input;
use crate::render;
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub controller: Controller,

    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    // Published for picking so taps test against the mesh as drawn
    pub solid_model: Rc<RefCell<Mat4>>,

    pub rotation: Rotation,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        // Tab switches stall rAF; don't let one frame jump the animation
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        self.rotation.advance(dt_sec);
        let model = self.rotation.model_matrix(HEART_SCALE);
        *self.solid_model.borrow_mut() = model;

        self.controller.dispatch(Input::Tick { dt_sec });

        let w = self.canvas.width();
        let h = self.canvas.height();
        {
            let mut cam = self.camera.borrow_mut();
            if !self.drag_state.borrow().active {
                cam.auto_rotate(dt_sec);
            }
            cam.set_aspect(w as f32, h as f32);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let cam = self.camera.borrow();
            let view = render::SceneView {
                camera: &cam,
                model,
            };
            if let Err(e) = g.render(dt_sec, &view) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &SolidMesh,
    particles: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh, particles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
