use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Create the letter's background track. Returns `None` (and logs) when the
/// element cannot be created; the letter then opens silently.
pub fn create_letter_audio(src: &str) -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(audio) => {
            audio.set_preload("auto");
            Some(audio)
        }
        Err(e) => {
            log::error!("[audio] HtmlAudioElement error for {}: {:?}", src, e);
            None
        }
    }
}

/// Rewind and start playback. Rejections (e.g. autoplay policy) are logged
/// and otherwise ignored.
pub fn play_from_start(audio: &web::HtmlAudioElement) {
    audio.set_current_time(0.0);
    let promise: js_sys::Promise = match audio.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[audio] play() threw: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] playback rejected: {:?}", e);
        }
    });
}

/// Pause and rewind so the next open starts from the beginning.
pub fn stop_and_rewind(audio: &web::HtmlAudioElement) {
    if let Err(e) = audio.pause() {
        log::warn!("[audio] pause() threw: {:?}", e);
    }
    audio.set_current_time(0.0);
}
