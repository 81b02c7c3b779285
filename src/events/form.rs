//! Contact form wiring: field inputs feed the signal score synchronously,
//! intent chips toggle, and submission runs as an async send whose
//! outcome drives the phase machine. A failed send keeps every entered
//! value in place.

use crate::constants::*;
use crate::core::{ContactForm, Phase, SendError, SiteContent};
use crate::dom;
use crate::render::{self, SignalRefs};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FormScene {
    pub form: ContactForm,
    refs: SignalRefs,
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    intent_chips: Vec<web::HtmlElement>,
}

impl FormScene {
    pub fn mount(document: &web::Document, content: &'static SiteContent) -> Option<Rc<RefCell<Self>>> {
        let name: web::HtmlInputElement = document
            .get_element_by_id(CONTACT_NAME_ID)?
            .dyn_into()
            .ok()?;
        let email: web::HtmlInputElement = document
            .get_element_by_id(CONTACT_EMAIL_ID)?
            .dyn_into()
            .ok()?;
        let message: web::HtmlTextAreaElement = document
            .get_element_by_id(CONTACT_MESSAGE_ID)?
            .dyn_into()
            .ok()?;

        // Intent chips come from the persona's category list.
        let mut intent_chips = Vec::new();
        if let Some(wrap) = dom::element_by_id(document, CONTACT_INTENTS_ID) {
            for intent in content.intents {
                if let Some(chip) = dom::append_child(document, &wrap, "button", "intent-chip") {
                    _ = chip.set_attribute("type", "button");
                    dom::set_text(&chip, intent);
                    intent_chips.push(chip);
                }
            }
        }

        let refs = SignalRefs {
            bar: dom::element_by_id(document, SIGNAL_BAR_ID),
            value: dom::element_by_id(document, SIGNAL_VALUE_ID),
            status: dom::element_by_id(document, CONTACT_STATUS_ID),
            submit: document
                .get_element_by_id(CONTACT_SUBMIT_ID)
                .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok()),
        };

        let scene = Self {
            form: ContactForm::default(),
            refs,
            name,
            email,
            message,
            intent_chips,
        };
        scene.sync();
        Some(Rc::new(RefCell::new(scene)))
    }

    /// Pull the current field values into the form state.
    fn read_fields(&mut self) {
        self.form.name = self.name.value();
        self.form.email = self.email.value();
        self.form.message = self.message.value();
    }

    fn sync(&self) {
        render::apply_signal(
            &self.refs,
            self.form.score(),
            self.form.can_submit(),
            self.form.phase,
        );
        for (i, chip) in self.intent_chips.iter().enumerate() {
            _ = chip
                .class_list()
                .toggle_with_force("active", self.form.intent == Some(i));
        }
    }

    /// A successful send cleared the form state; mirror that in the DOM.
    fn clear_fields(&self) {
        self.name.set_value("");
        self.email.set_value("");
        self.message.set_value("");
    }
}

/// The asynchronous delivery. Still a simulated transport: a fixed
/// latency followed by success. Swapping in a real backend call only
/// changes this function; the phase machine already handles both
/// outcomes.
async fn deliver() -> Result<(), SendError> {
    dom::sleep_ms(SEND_LATENCY_MS).await;
    Ok(())
}

pub fn wire(document: &web::Document, scene: Rc<RefCell<FormScene>>) {
    // Field edits rescore immediately.
    let inputs: [web::EventTarget; 3] = {
        let s = scene.borrow();
        [
            s.name.clone().into(),
            s.email.clone().into(),
            s.message.clone().into(),
        ]
    };
    for target in &inputs {
        let scene_input = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut s = scene_input.borrow_mut();
            s.read_fields();
            s.sync();
        }) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Intent chips toggle their category.
    let chips = scene.borrow().intent_chips.clone();
    for (i, chip) in chips.into_iter().enumerate() {
        let scene_chip = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut s = scene_chip.borrow_mut();
            s.form.intent = if s.form.intent == Some(i) { None } else { Some(i) };
            s.sync();
        }) as Box<dyn FnMut()>);
        _ = chip.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Submission: gate, async send, outcome, timed revert to idle.
    let scene_submit = scene.clone();
    dom::add_click_listener(document, CONTACT_SUBMIT_ID, move || {
        {
            let mut s = scene_submit.borrow_mut();
            s.read_fields();
            if !s.form.begin_submit() {
                return;
            }
            s.sync();
        }
        let scene_async = scene_submit.clone();
        spawn_local(async move {
            let outcome = deliver().await;
            {
                let mut s = scene_async.borrow_mut();
                s.form.finish_submit(outcome);
                if s.form.phase == Phase::Sent {
                    s.clear_fields();
                }
                s.sync();
            }
            if scene_async.borrow().form.phase == Phase::Sent {
                dom::sleep_ms(SENT_REVERT_MS).await;
                let mut s = scene_async.borrow_mut();
                s.form.reset_phase();
                s.sync();
            }
        });
    });
}
