use crate::audio;
use crate::constants::{FULLSCREEN_METHODS, FULLSCREEN_PROMPT_ID, HINT_ID, LETTER_ID};
use crate::core::{Effect, Input, Session, HINT_DELAY_MS};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Browser side of the overlay session: feeds inputs into `Session` and
/// applies the resulting effects to the DOM, the audio element and the hint
/// timer.
#[derive(Clone)]
pub struct Controller {
    session: Rc<RefCell<Session>>,
    document: web::Document,
    audio: Option<web::HtmlAudioElement>,
    hint_timer: Rc<RefCell<Option<i32>>>,
    line_count: usize,
}

impl Controller {
    pub fn new(
        document: web::Document,
        session: Session,
        audio: Option<web::HtmlAudioElement>,
        line_count: usize,
    ) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            document,
            audio,
            hint_timer: Rc::new(RefCell::new(None)),
            line_count,
        }
    }

    pub fn dispatch(&self, input: Input) {
        let mut effects = Vec::new();
        // Release the borrow before touching the DOM; effects may re-enter.
        self.session.borrow_mut().handle(input, &mut effects);
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Schedule the one-shot hint timer.
    pub fn arm_hint_timer(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let this = self.clone();
        let callback = Closure::once_into_js(move || {
            this.hint_timer.borrow_mut().take();
            this.dispatch(Input::HintTimerElapsed);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            HINT_DELAY_MS,
        ) {
            Ok(id) => *self.hint_timer.borrow_mut() = Some(id),
            Err(e) => log::warn!("[hint] setTimeout failed: {:?}", e),
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::ShowLetter => {
                log::info!("[overlay] open");
                overlay::reset_lines(&self.document, self.line_count);
                overlay::show(&self.document, LETTER_ID);
            }
            Effect::HideLetter => {
                log::info!("[overlay] close");
                overlay::hide(&self.document, LETTER_ID);
                overlay::reset_lines(&self.document, self.line_count);
            }
            Effect::PlayAudio => {
                if let Some(a) = &self.audio {
                    audio::play_from_start(a);
                }
            }
            Effect::StopAudio => {
                if let Some(a) = &self.audio {
                    audio::stop_and_rewind(a);
                }
            }
            Effect::RevealLine(i) => overlay::reveal_line(&self.document, i),
            Effect::ShowHint => overlay::show(&self.document, HINT_ID),
            Effect::HideHint => overlay::hide(&self.document, HINT_ID),
            Effect::CancelHintTimer => {
                if let Some(id) = self.hint_timer.borrow_mut().take() {
                    if let Some(w) = web::window() {
                        w.clear_timeout_with_handle(id);
                    }
                }
            }
            Effect::HideFullscreenPrompt => overlay::hide(&self.document, FULLSCREEN_PROMPT_ID),
            Effect::RequestFullscreen => request_fullscreen(&self.document),
        }
    }
}

/// Ask for fullscreen on the root element. Missing support, synchronous
/// throws and promise rejections are all logged and ignored.
fn request_fullscreen(document: &web::Document) {
    let Some(el) = document.document_element() else {
        log::warn!("[fullscreen] no document element");
        return;
    };
    let method = FULLSCREEN_METHODS.iter().find_map(|name| {
        js_sys::Reflect::get(&el, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    });
    let Some(method) = method else {
        log::warn!("[fullscreen] not supported");
        return;
    };
    let result = match method.call0(&el) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[fullscreen] request threw: {:?}", e);
            return;
        }
    };
    // The prefixed variant returns undefined instead of a promise
    if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[fullscreen] request rejected: {:?}", e);
            }
        });
    }
}
