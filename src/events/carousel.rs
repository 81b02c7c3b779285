//! Project carousel wiring: the 30 ms progress poll, hover pause/resume
//! over the detail panel, manual selection from the list, and the
//! parallax glow. The clock handed to the state machine is elapsed
//! milliseconds since init.

use crate::constants::*;
use crate::core::{CycleState, ProjectRecord, SiteContent, POLL_INTERVAL_MS};
use crate::dom;
use crate::events::pointer::on_pointer_event;
use crate::input;
use crate::render::{self, CarouselRefs};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CarouselScene {
    pub cycle: CycleState,
    refs: CarouselRefs,
    panel: web::HtmlElement,
    list_entries: Vec<web::HtmlElement>,
    content: &'static SiteContent,
    epoch: Instant,
    /// anim_key already reflected in the DOM.
    shown_key: u64,
}

impl CarouselScene {
    pub fn mount(
        document: &web::Document,
        content: &'static SiteContent,
        epoch: Instant,
    ) -> Option<Rc<RefCell<Self>>> {
        if content.projects.is_empty() {
            return None;
        }
        let panel = dom::element_by_id(document, PROJECT_PANEL_ID)?;
        let content_el =
            dom::element_by_id(document, PROJECT_CONTENT_ID).unwrap_or_else(|| panel.clone());

        // Selector list, one entry per project.
        let mut list_entries = Vec::new();
        if let Some(list) = dom::element_by_id(document, PROJECT_LIST_ID) {
            for (i, project) in content.projects.iter().enumerate() {
                let Some(entry) = dom::append_child(document, &list, "button", "project-entry")
                else {
                    continue;
                };
                if let Some(num) = dom::append_child(document, &entry, "span", "entry-number") {
                    dom::set_text(&num, &format!("{:02}", i + 1));
                }
                if let Some(title) = dom::append_child(document, &entry, "span", "entry-title") {
                    dom::set_text(&title, project.title);
                }
                if let Some(sub) = dom::append_child(document, &entry, "span", "entry-subtitle") {
                    dom::set_text(&sub, project.subtitle);
                }
                list_entries.push(entry);
            }
        }

        let refs = CarouselRefs {
            content: content_el,
            status: dom::element_by_id(document, PROJECT_STATUS_ID),
            subtitle: dom::element_by_id(document, PROJECT_SUBTITLE_ID),
            title: dom::element_by_id(document, PROJECT_TITLE_ID),
            desc: dom::element_by_id(document, PROJECT_DESC_ID),
            tags: dom::element_by_id(document, PROJECT_TAGS_ID),
            link: dom::element_by_id(document, PROJECT_LINK_ID),
            progress: dom::element_by_id(document, CYCLE_PROGRESS_ID),
            counter: dom::element_by_id(document, CYCLE_COUNTER_ID),
            glow: dom::element_by_id(document, PANEL_GLOW_ID),
        };

        let cycle = CycleState::new(content.projects.len(), 0.0);
        let mut scene = Self {
            cycle,
            refs,
            panel,
            list_entries,
            content,
            epoch,
            shown_key: u64::MAX,
        };
        scene.sync_shown(document);
        scene.sync_progress();
        scene.sync_glow();
        Some(Rc::new(RefCell::new(scene)))
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn active_project(&self) -> &'static ProjectRecord {
        &self.content.projects[self.cycle.index]
    }

    /// Re-render the detail panel and list highlight when the shown
    /// project changed (auto-advance or manual pick).
    fn sync_shown(&mut self, document: &web::Document) {
        if self.cycle.anim_key == self.shown_key {
            return;
        }
        self.shown_key = self.cycle.anim_key;
        render::apply_carousel_content(
            document,
            &self.refs,
            self.active_project(),
            self.cycle.index,
            self.cycle.count,
        );
        for (i, entry) in self.list_entries.iter().enumerate() {
            _ = entry
                .class_list()
                .toggle_with_force("active", i == self.cycle.index);
        }
    }

    fn sync_progress(&self) {
        render::apply_carousel_progress(&self.refs, self.cycle.progress, self.active_project());
    }

    fn sync_glow(&self) {
        render::apply_panel_glow(
            &self.refs,
            self.cycle.glow_pos,
            self.cycle.hovering,
            self.active_project(),
        );
    }
}

pub fn wire(document: &web::Document, scene: Rc<RefCell<CarouselScene>>) {
    // Progress poll.
    {
        let doc = document.clone();
        let scene_poll = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut s = scene_poll.borrow_mut();
            let now = s.now_ms();
            s.cycle.poll(now);
            s.sync_shown(&doc);
            s.sync_progress();
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                POLL_INTERVAL_MS,
            );
        }
        closure.forget();
    }

    // Hover pause/resume and parallax glow on the detail panel.
    let panel = scene.borrow().panel.clone();

    let scene_enter = scene.clone();
    on_pointer_event(&panel, "pointerenter", move |_ev| {
        scene_enter.borrow_mut().cycle.pause();
    });

    let scene_leave = scene.clone();
    on_pointer_event(&panel, "pointerleave", move |_ev| {
        let mut s = scene_leave.borrow_mut();
        let now = s.now_ms();
        s.cycle.resume(now);
        s.cycle.clear_glow();
        s.sync_glow();
    });

    let scene_move = scene.clone();
    let panel_for_move = panel.clone();
    on_pointer_event(&panel, "pointermove", move |ev| {
        let mut s = scene_move.borrow_mut();
        s.cycle
            .set_glow(input::pointer_element_unit(&ev, &panel_for_move));
        s.sync_glow();
    });

    // Manual selection from the list.
    let entries = scene.borrow().list_entries.clone();
    for (i, entry) in entries.into_iter().enumerate() {
        let doc = document.clone();
        let scene_click = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut s = scene_click.borrow_mut();
            let now = s.now_ms();
            log::info!("[carousel] select project {i}");
            s.cycle.select(i, now);
            s.sync_shown(&doc);
            s.sync_progress();
        }) as Box<dyn FnMut()>);
        _ = entry.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
