#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, FULLSCREEN_ACCEPT_ID, HINT_ID, LETTER_CLOSE_ID};
use crate::core::{heart_mesh, Input, OrbitCamera, ParticleField, Rotation, Session};
use crate::core::{PARTICLE_BASE_RADIUS, PARTICLE_COUNT};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod controller;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

// Keep the canvas backing store at CSS size * devicePixelRatio
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

fn wire_overlay_buttons(document: &web::Document, controller: &controller::Controller) {
    let c = controller.clone();
    dom::add_click_listener(document, LETTER_CLOSE_ID, move || c.dispatch(Input::Close));

    let c = controller.clone();
    dom::add_click_listener(document, FULLSCREEN_ACCEPT_ID, move || {
        c.dispatch(Input::AcceptFullscreen)
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-letter starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // Letter overlay, hint and audio
    let config = dom::read_letter_config(&document);
    overlay::populate_letter(&document, &config.lines);
    overlay::set_text(&document, HINT_ID, &config.hint_text);
    let audio = audio::create_letter_audio(&config.audio_src);
    let session = Session::new(config.lines.len(), config.line_stagger_sec);
    let controller =
        controller::Controller::new(document.clone(), session, audio, config.lines.len());
    wire_overlay_buttons(&document, &controller);
    controller.arm_hint_timer();

    // Scene content
    let mesh = heart_mesh();
    let particles = ParticleField::generate(
        &mut rand::thread_rng(),
        PARTICLE_COUNT,
        PARTICLE_BASE_RADIUS,
    );
    log::info!(
        "[scene] heart triangles={} particles={}",
        mesh.triangle_count(),
        particles.len()
    );

    let gpu = frame::init_gpu(&canvas, &mesh, &particles).await;

    // ---------------- Interaction state ----------------
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    let rotation = Rotation::default();
    let solid_model = Rc::new(RefCell::new(rotation.model_matrix(crate::core::HEART_SCALE)));
    let solid_positions = Rc::new(mesh.positions());

    events::wire_input_handlers(events::InputWiring::new(
        canvas.clone(),
        controller.clone(),
        camera.clone(),
        drag_state.clone(),
        solid_model.clone(),
        solid_positions,
    ));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu,
        controller,
        camera,
        drag_state,
        solid_model,
        rotation,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
