//! Pointer wiring for the three pointer-reactive scenes. Handlers write
//! into the shared scene state; the next frame or sync pass picks the new
//! values up. Listeners live for the page lifetime (`forget`).

use crate::core::magnet_offset;
use crate::events::scroll::CtaScene;
use crate::frame::{FieldScene, SphereScene};
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(crate) fn on_pointer_event(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Field canvas: track the pointer in canvas pixels, drop to inactive
/// when it leaves so the wake dies out.
pub fn wire_field(field: Rc<RefCell<FieldScene>>) {
    let canvas = field.borrow().canvas.clone();

    let field_move = field.clone();
    let canvas_for_move = canvas.clone();
    on_pointer_event(&canvas, "pointermove", move |ev| {
        let mut scene = field_move.borrow_mut();
        scene.pointer.pos = input::pointer_element_px(&ev, &canvas_for_move);
        scene.pointer.active = true;
    });

    let field_leave = field.clone();
    on_pointer_event(&canvas, "pointerleave", move |_ev| {
        field_leave.borrow_mut().pointer.active = false;
    });
}

/// Sphere drag: down on the skills section starts a drag, move anywhere
/// rotates, up or leaving the section releases into momentum.
pub fn wire_sphere(section: &web::HtmlElement, sphere: Rc<RefCell<SphereScene>>) {
    let sphere_down = sphere.clone();
    on_pointer_event(section, "pointerdown", move |ev| {
        sphere_down
            .borrow_mut()
            .orbit
            .begin_drag(input::pointer_client(&ev));
        ev.prevent_default();
    });

    if let Some(window) = web::window() {
        let sphere_move = sphere.clone();
        on_pointer_event(&window, "pointermove", move |ev| {
            sphere_move
                .borrow_mut()
                .orbit
                .drag_to(input::pointer_client(&ev));
        });

        let sphere_up = sphere.clone();
        on_pointer_event(&window, "pointerup", move |_ev| {
            sphere_up.borrow_mut().orbit.end_drag();
        });
    }

    let sphere_leave = sphere.clone();
    on_pointer_event(section, "pointerleave", move |_ev| {
        sphere_leave.borrow_mut().orbit.end_drag();
    });
}

/// Magnetic CTA: the button leans toward the pointer while hovered and
/// snaps back on leave.
pub fn wire_cta_magnet(cta: Rc<RefCell<CtaScene>>) {
    let wrap = cta.borrow().wrap.clone();
    let button = cta.borrow().button.clone();

    let cta_move = cta.clone();
    let button_for_move = button.clone();
    on_pointer_event(&wrap, "pointermove", move |ev| {
        let mut scene = cta_move.borrow_mut();
        if !scene.hovering {
            return;
        }
        let (center, half) = input::element_center_half(&button_for_move);
        scene.offset = magnet_offset(input::pointer_client(&ev), center, half);
        scene.sync();
    });

    let cta_enter = cta.clone();
    on_pointer_event(&button, "pointerenter", move |_ev| {
        let mut scene = cta_enter.borrow_mut();
        scene.hovering = true;
        scene.sync();
    });

    let cta_leave = cta.clone();
    on_pointer_event(&button, "pointerleave", move |_ev| {
        let mut scene = cta_leave.borrow_mut();
        scene.hovering = false;
        scene.offset = Vec2::ZERO;
        scene.sync();
    });
}
