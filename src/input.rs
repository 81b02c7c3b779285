use glam::Vec2;
use web_sys as web;

/// Pointer position relative to an element, in that element's CSS pixel
/// space (canvas backing stores match CSS size, see `dom`).
#[inline]
pub fn pointer_element_px(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Pointer position inside an element normalised to [0,1] on both axes.
/// Centre when the element has no extent yet.
#[inline]
pub fn pointer_element_unit(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            ((ev.client_x() as f32 - rect.left() as f32) / w).clamp(0.0, 1.0),
            ((ev.client_y() as f32 - rect.top() as f32) / h).clamp(0.0, 1.0),
        )
    } else {
        Vec2::new(0.5, 0.5)
    }
}

/// Viewport-space pointer position (clientX/clientY).
#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Centre and half extents of an element in viewport space.
pub fn element_center_half(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let half = Vec2::new(rect.width() as f32 * 0.5, rect.height() as f32 * 0.5);
    let center = Vec2::new(rect.left() as f32, rect.top() as f32) + half;
    (center, half)
}
