//! Output side of every scene: canvas 2D draw calls for the particle
//! layers and inline style writes for the DOM-driven ones. Render never
//! mutates simulation state; the frame loop updates first, then calls in
//! here with the results.

use crate::core::{
    CtaTheme, DepthCue, MeshLink, MeshParticle, OrbitState, ParticleShape, ParticleVisual, Phase,
    ProjectRecord, SPHERE_RADIUS,
};
use crate::dom;
use glam::{Vec2, Vec3};
use std::f64::consts::TAU;
use web_sys as web;

// ---------------- Ambient particle field ----------------

pub fn draw_field(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, visuals: &[ParticleVisual]) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for v in visuals {
        let color = format!("rgba(34, {}, 94, {:.3})", v.green, v.alpha);
        ctx.set_stroke_style_str(&color);
        ctx.set_fill_style_str(&color);
        ctx.set_line_width(v.line_width as f64);

        let x = v.pos.x as f64;
        let y = v.pos.y as f64;
        let size = v.size as f64;
        match v.shape {
            ParticleShape::Plus => {
                let half = size / 2.0;
                ctx.begin_path();
                ctx.move_to(x - half, y);
                ctx.line_to(x + half, y);
                ctx.stroke();
                ctx.begin_path();
                ctx.move_to(x, y - half);
                ctx.line_to(x, y + half);
                ctx.stroke();
            }
            ParticleShape::Dot => {
                ctx.begin_path();
                _ = ctx.arc(x, y, size * 0.3, 0.0, TAU);
                ctx.fill();
            }
            ParticleShape::Diamond => {
                let half = size * 0.4;
                ctx.begin_path();
                ctx.move_to(x, y - half);
                ctx.line_to(x + half, y);
                ctx.line_to(x, y + half);
                ctx.line_to(x - half, y);
                ctx.close_path();
                ctx.stroke();
            }
        }

        // Halo around particles close to the cursor.
        if v.glow_alpha > 0.0 {
            ctx.set_fill_style_str(&format!("rgba(34, {}, 94, {:.3})", v.green, v.glow_alpha));
            ctx.begin_path();
            _ = ctx.arc(x, y, size * 0.8, 0.0, TAU);
            ctx.fill();
        }
    }
}

// ---------------- Linked mesh overlay ----------------

pub fn draw_mesh(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    particles: &[MeshParticle],
    links: &[MeshLink],
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str("rgba(74, 222, 128, 0.5)");
    ctx.set_stroke_style_str("rgba(74, 222, 128, 0.2)");

    for p in particles {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
        ctx.fill();
    }
    for l in links {
        ctx.set_line_width(l.width as f64);
        ctx.begin_path();
        ctx.move_to(l.a.x as f64, l.a.y as f64);
        ctx.line_to(l.b.x as f64, l.b.y as f64);
        ctx.stroke();
    }
}

// ---------------- Skill sphere ----------------

/// Write the stage rotation and each item's counter-rotated transform,
/// depth opacity and paint order. `items` and `points` are index-aligned.
pub fn apply_sphere_transforms(
    stage: &web::HtmlElement,
    items: &[web::HtmlElement],
    points: &[Vec3],
    orbit: &OrbitState,
    cues: &[DepthCue],
) {
    dom::set_style(
        stage,
        "transform",
        &format!(
            "rotateX({:.2}deg) rotateY({:.2}deg)",
            orbit.rot_x_deg, orbit.rot_y_deg
        ),
    );
    for ((item, point), cue) in items.iter().zip(points).zip(cues) {
        dom::set_style(item, "opacity", &format!("{:.2}", cue.opacity));
        dom::set_style(
            item,
            "transform",
            &format!(
                "translate3d({:.1}px, {:.1}px, {:.1}px) rotateY({:.2}deg) rotateX({:.2}deg) scale({:.3})",
                point.x * SPHERE_RADIUS,
                point.y * SPHERE_RADIUS,
                point.z * SPHERE_RADIUS,
                -orbit.rot_y_deg,
                -orbit.rot_x_deg,
                cue.scale
            ),
        );
        dom::set_style(item, "z-index", &cue.z_index.to_string());
    }
}

// ---------------- Floating CTA ----------------

pub fn apply_cta(
    button: &web::HtmlElement,
    icon: Option<&web::HtmlElement>,
    label: Option<&web::HtmlElement>,
    theme: &CtaTheme,
    visible: bool,
    hovering: bool,
    offset: Vec2,
) {
    if let Some(icon) = icon {
        dom::set_text(icon, theme.icon);
    }
    if let Some(label) = label {
        dom::set_text(label, theme.label);
    }
    dom::set_style(button, "background", theme.gradient);
    dom::set_style(
        button,
        "box-shadow",
        if hovering { theme.glow_hover } else { theme.glow },
    );
    let scale = if hovering { 1.05 } else { 1.0 };
    let lift = if visible { 0.0 } else { 80.0 };
    dom::set_style(
        button,
        "transform",
        &format!(
            "translate({:.1}px, {:.1}px) scale({}) translateY({}px)",
            offset.x, offset.y, scale, lift
        ),
    );
    dom::set_style(button, "opacity", if visible { "1" } else { "0" });
    // While hovered the position must track the pointer immediately; the
    // eased transition only applies to the show/hide travel.
    dom::set_style(
        button,
        "transition",
        if hovering {
            "box-shadow 0.3s ease, opacity 0.5s ease"
        } else {
            "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)"
        },
    );
}

// ---------------- Project carousel ----------------

pub struct CarouselRefs {
    pub content: web::HtmlElement,
    pub status: Option<web::HtmlElement>,
    pub subtitle: Option<web::HtmlElement>,
    pub title: Option<web::HtmlElement>,
    pub desc: Option<web::HtmlElement>,
    pub tags: Option<web::HtmlElement>,
    pub link: Option<web::HtmlElement>,
    pub progress: Option<web::HtmlElement>,
    pub counter: Option<web::HtmlElement>,
    pub glow: Option<web::HtmlElement>,
}

/// Swap the detail panel to a project and restart its enter transition.
pub fn apply_carousel_content(
    document: &web::Document,
    refs: &CarouselRefs,
    project: &ProjectRecord,
    index: usize,
    count: usize,
) {
    if let Some(el) = &refs.status {
        dom::set_text(el, project.status);
    }
    if let Some(el) = &refs.subtitle {
        dom::set_text(el, project.subtitle);
        dom::set_style(el, "color", project.accent);
    }
    if let Some(el) = &refs.title {
        dom::set_text(el, project.title);
    }
    if let Some(el) = &refs.desc {
        dom::set_text(el, project.description);
    }
    if let Some(tags) = &refs.tags {
        tags.set_inner_html("");
        for tag in project.tags {
            if let Some(span) = dom::append_child(document, tags, "span", "project-tag") {
                dom::set_text(&span, tag);
                dom::set_style(&span, "border-color", &format!("rgba({},0.15)", project.accent_rgb));
                dom::set_style(&span, "background", &format!("rgba({},0.06)", project.accent_rgb));
                dom::set_style(&span, "color", project.accent);
            }
        }
    }
    if let Some(el) = &refs.link {
        _ = el.set_attribute("href", project.link);
        dom::set_style(el, "color", project.accent);
    }
    if let Some(el) = &refs.counter {
        dom::set_text(el, &format!("{}/{}", index + 1, count));
    }

    // Re-adding the class after a forced reflow restarts the CSS enter
    // animation, standing in for a keyed remount.
    let cl = refs.content.class_list();
    _ = cl.remove_1("card-enter");
    let _ = refs.content.offset_width();
    _ = cl.add_1("card-enter");
}

pub fn apply_carousel_progress(refs: &CarouselRefs, progress: f64, project: &ProjectRecord) {
    if let Some(bar) = &refs.progress {
        dom::set_style(bar, "width", &format!("{:.1}%", progress * 100.0));
        dom::set_style(bar, "background", project.accent);
        dom::set_style(
            bar,
            "box-shadow",
            &format!("0 0 8px rgba({},0.5)", project.accent_rgb),
        );
    }
}

pub fn apply_panel_glow(refs: &CarouselRefs, pos: Vec2, hovering: bool, project: &ProjectRecord) {
    if let Some(glow) = &refs.glow {
        dom::set_style(glow, "left", &format!("{:.1}%", pos.x * 100.0));
        dom::set_style(glow, "top", &format!("{:.1}%", pos.y * 100.0));
        let strength = if hovering { 0.12 } else { 0.04 };
        dom::set_style(
            glow,
            "background",
            &format!(
                "radial-gradient(circle, rgba({},{}) 0%, transparent 70%)",
                project.accent_rgb, strength
            ),
        );
    }
}

// ---------------- Contact form ----------------

pub struct SignalRefs {
    pub bar: Option<web::HtmlElement>,
    pub value: Option<web::HtmlElement>,
    pub status: Option<web::HtmlElement>,
    pub submit: Option<web::HtmlButtonElement>,
}

/// Reflect the current score and phase: bar width, numeric readout,
/// submit gating and the phase-dependent button label.
pub fn apply_signal(refs: &SignalRefs, score: u32, can_submit: bool, phase: Phase) {
    if let Some(bar) = &refs.bar {
        dom::set_style(bar, "width", &format!("{}%", score));
    }
    if let Some(value) = &refs.value {
        dom::set_text(value, &format!("{score}%"));
    }
    if let Some(submit) = &refs.submit {
        let (label, disabled) = match phase {
            Phase::Idle => ("Send Message", !can_submit),
            Phase::Sending => ("Transmitting...", true),
            Phase::Sent => ("Signal Received", true),
            Phase::Failed(_) => ("Retry Send", !can_submit),
        };
        submit.set_text_content(Some(label));
        submit.set_disabled(disabled);
    }
    if let Some(status) = &refs.status {
        match phase {
            Phase::Sent => dom::set_text(status, "Thanks for reaching out! I'll get back to you soon."),
            Phase::Failed(e) => dom::set_text(status, &format!("Send failed: {e}. Your message is still here.")),
            _ => dom::set_text(status, ""),
        }
    }
}
