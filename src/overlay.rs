use crate::constants::{LETTER_LINES_ID, LETTER_LINE_ID_PREFIX};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Fill the letter body with one hidden paragraph per line.
pub fn populate_letter(document: &web::Document, lines: &[String]) {
    let Some(container) = document.get_element_by_id(LETTER_LINES_ID) else {
        log::warn!("[overlay] missing #{}", LETTER_LINES_ID);
        return;
    };
    container.set_inner_html("");
    for (i, line) in lines.iter().enumerate() {
        let p = match document.create_element("p") {
            Ok(p) => p,
            Err(e) => {
                log::error!("[overlay] create <p> failed: {:?}", e);
                continue;
            }
        };
        p.set_id(&format!("{}{}", LETTER_LINE_ID_PREFIX, i));
        _ = p.class_list().add_1("letter-line");
        p.set_text_content(Some(line));
        _ = container.append_child(&p);
    }
}

/// Start the entrance transition of one line.
pub fn reveal_line(document: &web::Document, index: usize) {
    let id = format!("{}{}", LETTER_LINE_ID_PREFIX, index);
    if let Some(el) = document.get_element_by_id(&id) {
        _ = el.class_list().add_1("visible");
    }
}

/// Return every line to its hidden starting pose.
pub fn reset_lines(document: &web::Document, count: usize) {
    for i in 0..count {
        let id = format!("{}{}", LETTER_LINE_ID_PREFIX, i);
        if let Some(el) = document.get_element_by_id(&id) {
            _ = el.class_list().remove_1("visible");
        }
    }
}
