pub mod carousel;
pub mod form;
pub mod pointer;
pub mod scroll;

use crate::constants::{CLOCK_ID, CLOCK_INTERVAL_MS, COPY_EMAIL_ID};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cosmetic local-time readout in the hero card, refreshed once a minute.
pub fn wire_clock(document: &web::Document) {
    let Some(el) = dom::element_by_id(document, CLOCK_ID) else {
        return;
    };
    let update = move |el: &web::HtmlElement| {
        let now = js_sys::Date::new_0();
        let text: String = now.to_locale_time_string("en-US").into();
        dom::set_text(el, &text);
    };
    update(&el);

    let closure = Closure::wrap(Box::new(move || update(&el)) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            CLOCK_INTERVAL_MS,
        );
    }
    closure.forget();
}

/// "Copy email" affordance; the clipboard write is fire-and-forget.
pub fn wire_copy_email(document: &web::Document, email: &'static str) {
    dom::add_click_listener(document, COPY_EMAIL_ID, move || {
        if let Some(w) = web::window() {
            let _ = w.navigator().clipboard().write_text(email);
            log::info!("[contact] email copied");
        }
    });
}
