use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Match the canvas backing store to its parent's CSS size. Simulation
/// coordinates equal CSS pixels, so no devicePixelRatio scaling here.
/// A canvas without a parent (not mounted yet) is left alone.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        let w = parent.client_width().max(1) as u32;
        let h = parent.client_height().max(1) as u32;
        canvas.set_width(w);
        canvas.set_height(h);
    }
}

/// Acquire the 2d context, or None when the environment refuses one (the
/// owning scene is then skipped, it never crashes the page).
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_text(el: &web::HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

/// Create a child element with a class, appended to `parent`.
pub fn append_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    parent.append_child(&el).ok()?;
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Smooth-scroll to the element with the given id. Missing targets are a
/// no-op.
pub fn smooth_scroll_to(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Resolve after `ms` milliseconds via a window timeout.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
