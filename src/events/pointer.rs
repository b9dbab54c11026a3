use crate::camera;
use crate::constants::{DOUBLE_TAP_MAX_DISTANCE_PX, DOUBLE_TAP_WINDOW_MS, DRAG_THRESHOLD_PX};
use crate::controller::Controller;
use crate::core::{Input, OrbitCamera};
use crate::input;
use glam::{Mat4, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state the pointer handlers read and write.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Controller,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    /// Heart transform as of the last rendered frame.
    pub solid_model: Rc<RefCell<Mat4>>,
    /// Model-space triangle list, three positions per triangle.
    pub solid_positions: Rc<Vec<Vec3>>,
    pub double_tap: Rc<RefCell<input::DoubleTapDetector>>,
}

impl InputWiring {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        controller: Controller,
        camera: Rc<RefCell<OrbitCamera>>,
        drag_state: Rc<RefCell<input::DragState>>,
        solid_model: Rc<RefCell<Mat4>>,
        solid_positions: Rc<Vec<Vec3>>,
    ) -> Self {
        let double_tap =
            input::DoubleTapDetector::new(DOUBLE_TAP_WINDOW_MS, DOUBLE_TAP_MAX_DISTANCE_PX);
        Self {
            canvas,
            controller,
            camera,
            drag_state,
            solid_model,
            solid_positions,
            double_tap: Rc::new(RefCell::new(double_tap)),
        }
    }

    fn tap_hits_heart(&self, ev: &web::PointerEvent) -> bool {
        let px = input::pointer_canvas_px(ev, &self.canvas);
        let (ro, rd) = camera::screen_to_world_ray(&self.canvas, px, &self.camera.borrow());
        let model = *self.solid_model.borrow();
        input::pick_triangles(ro, rd, model, &self.solid_positions).is_some()
    }
}

fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[input] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn wire_input_handlers(w: InputWiring) {
    // Presses start on the canvas; moves and releases are tracked on the
    // window so a drag leaving the canvas still ends cleanly.
    let down = w.clone();
    listen(&w.canvas, "pointerdown", move |ev| {
        down.drag_state
            .borrow_mut()
            .begin(input::pointer_client_px(&ev));
        _ = down.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });

    let Some(window) = web::window() else {
        log::warn!("[input] no window; orbit and taps disabled");
        return;
    };

    let mv = w.clone();
    listen(&window, "pointermove", move |ev| {
        let delta = mv
            .drag_state
            .borrow_mut()
            .update(input::pointer_client_px(&ev), DRAG_THRESHOLD_PX);
        if let Some(d) = delta {
            let height = mv.canvas.get_bounding_client_rect().height() as f32;
            mv.camera.borrow_mut().drag(d.x, d.y, height);
        }
    });

    // lostpointercapture also follows every pointerup; by then the drag has
    // already ended, so cancelling again is a no-op.
    for event in ["pointercancel", "lostpointercapture"] {
        let cancel = w.clone();
        listen(&w.canvas, event, move |_| cancel.drag_state.borrow_mut().cancel());
    }

    let up = w;
    listen(&window, "pointerup", move |ev| {
        if !up.drag_state.borrow_mut().end() {
            return;
        }
        if !up.tap_hits_heart(&ev) {
            up.double_tap.borrow_mut().reset();
            return;
        }
        let double = up
            .double_tap
            .borrow_mut()
            .register(ev.time_stamp(), input::pointer_client_px(&ev));
        if double {
            log::info!("[tap] double tap on heart");
            up.controller.dispatch(Input::DoubleTapSolid);
        }
    });
}
