//! Per-frame scenes and the self-rescheduling repaint loop. Each scene
//! owns its canvas/DOM handles and simulation state; `FrameContext`
//! just ticks whichever scenes mounted. Within a frame a scene always
//! finishes mutating before it draws.

use crate::constants::*;
use crate::core::{
    project_depth, sphere_point, DepthCue, FieldState, MeshLink, MeshState, OrbitState,
    ParticleVisual, PointerState, SiteContent,
};
use crate::dom;
use crate::render;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FieldScene {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: FieldState,
    pub pointer: PointerState,
    visuals: Vec<ParticleVisual>,
}

impl FieldScene {
    pub fn mount(document: &web::Document) -> Option<Rc<RefCell<Self>>> {
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(FIELD_CANVAS_ID)?
            .dyn_into()
            .ok()?;
        dom::sync_canvas_to_parent(&canvas);
        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("[field] no 2d context, scene disabled");
            return None;
        };
        let mut state = FieldState::new(FIELD_SEED);
        state.seed_if_empty(canvas.width() as f32, canvas.height() as f32);
        Some(Rc::new(RefCell::new(Self {
            canvas,
            ctx,
            state,
            pointer: PointerState::default(),
            visuals: Vec::new(),
        })))
    }

    fn frame(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.state.advance(w, h, self.pointer, &mut self.visuals);
        render::draw_field(&self.ctx, w as f64, h as f64, &self.visuals);
    }
}

pub struct SphereScene {
    pub stage: web::HtmlElement,
    pub items: Vec<web::HtmlElement>,
    pub points: Vec<Vec3>,
    pub orbit: OrbitState,
    cues: Vec<DepthCue>,
}

impl SphereScene {
    /// Build one positioned item per skill label under the stage element.
    pub fn mount(document: &web::Document, content: &SiteContent) -> Option<Rc<RefCell<Self>>> {
        let stage = dom::element_by_id(document, SPHERE_STAGE_ID)?;
        let count = content.skills.len();
        let mut items = Vec::with_capacity(count);
        let mut points = Vec::with_capacity(count);
        for (i, skill) in content.skills.iter().enumerate() {
            let item = dom::append_child(document, &stage, "div", "sphere-item")?;
            dom::set_text(&item, skill);
            items.push(item);
            points.push(sphere_point(i, count));
        }
        Some(Rc::new(RefCell::new(Self {
            stage,
            items,
            points,
            orbit: OrbitState::default(),
            cues: Vec::new(),
        })))
    }

    fn frame(&mut self) {
        self.orbit.step();
        self.cues.clear();
        for &p in &self.points {
            self.cues
                .push(project_depth(p, self.orbit.rot_x_deg, self.orbit.rot_y_deg));
        }
        render::apply_sphere_transforms(
            &self.stage,
            &self.items,
            &self.points,
            &self.orbit,
            &self.cues,
        );
    }
}

pub struct MeshScene {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub state: MeshState,
    links: Vec<MeshLink>,
}

impl MeshScene {
    pub fn mount(document: &web::Document) -> Option<Rc<RefCell<Self>>> {
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(MESH_CANVAS_ID)?
            .dyn_into()
            .ok()?;
        dom::sync_canvas_to_parent(&canvas);
        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("[mesh] no 2d context, scene disabled");
            return None;
        };
        let state = MeshState::new(MESH_SEED, canvas.width() as f32, canvas.height() as f32);
        Some(Rc::new(RefCell::new(Self {
            canvas,
            ctx,
            state,
            links: Vec::new(),
        })))
    }

    fn frame(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.state.advance(w, h);
        self.state.links(&mut self.links);
        render::draw_mesh(
            &self.ctx,
            w as f64,
            h as f64,
            &self.state.particles,
            &self.links,
        );
    }
}

/// Scenes driven by the repaint loop. Any of them may be absent when its
/// mount point is missing from the page.
pub struct FrameContext {
    pub field: Option<Rc<RefCell<FieldScene>>>,
    pub sphere: Option<Rc<RefCell<SphereScene>>>,
    pub mesh: Option<Rc<RefCell<MeshScene>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Some(field) = &self.field {
            field.borrow_mut().frame();
        }
        if let Some(sphere) = &self.sphere {
            sphere.borrow_mut().frame();
        }
        if let Some(mesh) = &self.mesh {
            mesh.borrow_mut().frame();
        }
    }
}

/// Continuous repaint loop via requestAnimationFrame; each callback
/// reschedules itself after the frame work is done.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
