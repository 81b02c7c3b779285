#![cfg(target_arch = "wasm32")]
//! WASM entry point. Looks up the scene mount points in the page, builds
//! each scene that is actually present, wires events and starts the
//! repaint loop. A missing mount point or an unavailable canvas context
//! disables that scene only; the rest of the page keeps running.

use crate::core::content_for_variant;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

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

    // Persona content set, selected by <body data-variant="...">.
    let variant = document.body().and_then(|b| b.get_attribute("data-variant"));
    let content = content_for_variant(variant.as_deref());
    log::info!(
        "[init] persona={} skills={} projects={}",
        content.persona,
        content.skills.len(),
        content.projects.len()
    );

    let epoch = Instant::now();

    // Frame-driven scenes.
    let field = frame::FieldScene::mount(&document);
    let sphere = frame::SphereScene::mount(&document, content);
    let mesh = frame::MeshScene::mount(&document);
    if field.is_none() {
        log::warn!("[init] particle field not mounted");
    }
    if sphere.is_none() {
        log::warn!("[init] skill sphere not mounted");
    }

    if let Some(field) = &field {
        events::pointer::wire_field(field.clone());
    }
    if let Some(sphere) = &sphere {
        if let Some(section) = dom::element_by_id(&document, constants::SPHERE_SECTION_ID) {
            events::pointer::wire_sphere(&section, sphere.clone());
        }
    }

    // Floating CTA: scroll-driven state plus the magnetic hover.
    let cta = events::scroll::CtaScene::mount(&document);
    if let Some(cta) = &cta {
        events::pointer::wire_cta_magnet(cta.clone());
        events::scroll::wire_cta_click(&document, cta.clone());
    }
    events::scroll::wire_scroll(&document, cta.clone());
    events::scroll::wire_resize(&document, field.clone(), mesh.clone(), cta.clone());

    // Timer-driven scenes.
    if let Some(carousel) = events::carousel::CarouselScene::mount(&document, content, epoch) {
        events::carousel::wire(&document, carousel);
    } else {
        log::warn!("[init] project carousel not mounted");
    }
    if let Some(form) = events::form::FormScene::mount(&document, content) {
        events::form::wire(&document, form);
    }

    // Cosmetic extras.
    events::wire_clock(&document);
    events::wire_copy_email(&document, content.email);

    // Repaint loop last, once every scene that exists is wired.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        sphere,
        mesh,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
