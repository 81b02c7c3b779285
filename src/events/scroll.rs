//! Scroll and resize wiring: navigation condensation, floating-CTA
//! visibility and section tracking, canvas backing-size upkeep, and the
//! section offset table rebuild.

use crate::constants::*;
use crate::core::{cta_theme, cta_visible, Section, SectionTable};
use crate::dom;
use crate::frame::{FieldScene, MeshScene};
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Section anchor ids in document order.
const SECTION_IDS: [(&str, Section); 5] = [
    ("home", Section::Home),
    ("about", Section::About),
    ("skills", Section::Skills),
    ("projects", Section::Projects),
    ("contact", Section::Contact),
];

/// Read the start offset of every section anchor present in the page.
/// Only called on init and resize; scrolling itself never touches layout.
pub fn build_section_table(document: &web::Document) -> SectionTable {
    let mut offsets = Vec::new();
    for (id, section) in SECTION_IDS {
        if let Some(el) = dom::element_by_id(document, id) {
            offsets.push((section, el.offset_top() as f64));
        }
    }
    SectionTable::new(offsets)
}

pub struct CtaScene {
    pub wrap: web::HtmlElement,
    pub button: web::HtmlElement,
    pub icon: Option<web::HtmlElement>,
    pub label: Option<web::HtmlElement>,
    pub table: SectionTable,
    pub section: Section,
    pub visible: bool,
    pub hovering: bool,
    pub offset: Vec2,
}

impl CtaScene {
    pub fn mount(document: &web::Document) -> Option<Rc<RefCell<Self>>> {
        let wrap = dom::element_by_id(document, CTA_WRAP_ID)?;
        let button = dom::element_by_id(document, CTA_BUTTON_ID)?;
        let scene = Self {
            wrap,
            button,
            icon: dom::element_by_id(document, CTA_ICON_ID),
            label: dom::element_by_id(document, CTA_LABEL_ID),
            table: build_section_table(document),
            section: Section::Home,
            visible: false,
            hovering: false,
            offset: Vec2::ZERO,
        };
        scene.sync();
        Some(Rc::new(RefCell::new(scene)))
    }

    /// Push the full visual state to the button.
    pub fn sync(&self) {
        render::apply_cta(
            &self.button,
            self.icon.as_ref(),
            self.label.as_ref(),
            &cta_theme(self.section),
            self.visible,
            self.hovering,
            self.offset,
        );
    }

    fn on_scroll(&mut self, scroll_y: f64, viewport_h: f64) {
        let section = self.table.active_section(scroll_y, viewport_h);
        let visible = cta_visible(scroll_y, viewport_h);
        if section != self.section || visible != self.visible {
            self.section = section;
            self.visible = visible;
            self.sync();
        }
    }
}

fn scroll_metrics(window: &web::Window) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_y, viewport_h)
}

/// Scroll listener: condensed navigation bar plus CTA section/visibility.
pub fn wire_scroll(document: &web::Document, cta: Option<Rc<RefCell<CtaScene>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let nav = dom::element_by_id(document, NAV_ID);

    // Apply once immediately; a page restored mid-scroll should not wait
    // for the first scroll event.
    {
        let (scroll_y, viewport_h) = scroll_metrics(&window);
        if let Some(nav) = &nav {
            _ = nav
                .class_list()
                .toggle_with_force("nav-scrolled", scroll_y > NAV_CONDENSE_SCROLL_PX);
        }
        if let Some(cta) = &cta {
            cta.borrow_mut().on_scroll(scroll_y, viewport_h);
        }
    }

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (scroll_y, viewport_h) = scroll_metrics(&win);
        if let Some(nav) = &nav {
            _ = nav
                .class_list()
                .toggle_with_force("nav-scrolled", scroll_y > NAV_CONDENSE_SCROLL_PX);
        }
        if let Some(cta) = &cta {
            cta.borrow_mut().on_scroll(scroll_y, viewport_h);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicking the CTA smooth-scrolls to its current target anchor.
pub fn wire_cta_click(document: &web::Document, cta: Rc<RefCell<CtaScene>>) {
    let doc = document.clone();
    dom::add_click_listener(document, CTA_BUTTON_ID, move || {
        let target = cta_theme(cta.borrow().section).target;
        log::info!("[cta] scroll to #{target}");
        dom::smooth_scroll_to(&doc, target);
    });
}

/// Resize listener: re-sync canvas backing stores (a non-empty particle
/// set is left in place) and rebuild the section offset table.
pub fn wire_resize(
    document: &web::Document,
    field: Option<Rc<RefCell<FieldScene>>>,
    mesh: Option<Rc<RefCell<MeshScene>>>,
    cta: Option<Rc<RefCell<CtaScene>>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(field) = &field {
            let mut scene = field.borrow_mut();
            dom::sync_canvas_to_parent(&scene.canvas);
            let (w, h) = (scene.canvas.width() as f32, scene.canvas.height() as f32);
            scene.state.seed_if_empty(w, h);
        }
        if let Some(mesh) = &mesh {
            dom::sync_canvas_to_parent(&mesh.borrow().canvas);
        }
        if let Some(cta) = &cta {
            cta.borrow_mut().table = build_section_table(&doc);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
