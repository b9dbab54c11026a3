use crate::constants::CONFIG_ID;
use crate::core::LetterConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler()) as Box<dyn FnMut()>
            );
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] missing #{}", element_id),
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Read the letter configuration from the page's JSON script element.
///
/// Falls back to defaults when the element is missing or invalid.
pub fn read_letter_config(document: &web::Document) -> LetterConfig {
    let text = document
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
        .filter(|t| !t.trim().is_empty());
    match text {
        Some(text) => match LetterConfig::from_json(&text) {
            Ok(config) => {
                log::info!("[config] {} letter lines", config.lines.len());
                config
            }
            Err(e) => {
                log::warn!("[config] {}; using defaults", e);
                LetterConfig::default()
            }
        },
        None => {
            log::info!("[config] no #{} element; using defaults", CONFIG_ID);
            LetterConfig::default()
        }
    }
}
