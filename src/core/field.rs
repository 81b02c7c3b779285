//! Drifting particle field rendered behind the about section.
//!
//! Pure simulation state: the owning scene calls [`FieldState::advance`]
//! once per frame with the canvas extent and the latest pointer snapshot,
//! then draws the visuals it emits. Nothing here touches the DOM, so the
//! whole module runs (and is tested) on native targets.

use glam::Vec2;
use rand::prelude::*;

pub const FIELD_PARTICLE_COUNT: usize = 300;
/// Pointer repulsion falloff distance in canvas pixels.
pub const POINTER_INFLUENCE: f32 = 180.0;
/// Fixed per-frame increment of the oscillation clock. Frame-rate
/// dependent on purpose: the cadence is part of the look.
pub const TIME_STEP: f32 = 0.01;
pub const REPULSION_FORCE: f32 = 8.0;
/// Particles are recycled once they are this far past the left edge.
pub const EXIT_MARGIN: f32 = 20.0;
/// Recycled particles re-enter within this band past the right edge.
pub const RESPAWN_BAND: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleShape {
    Plus,
    Dot,
    Diamond,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Leftward drift per frame.
    pub speed: f32,
    /// Vertical oscillation amplitude; signed, so half the field waves down.
    pub drift: f32,
    pub size: f32,
    /// Phase offset so neighbouring particles never pulse in sync.
    pub phase: f32,
    pub shape: ParticleShape,
}

/// Latest pointer position in canvas pixels, or inactive when the cursor
/// has left the canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub active: bool,
}

/// Everything the renderer needs for one particle this frame.
#[derive(Clone, Copy, Debug)]
pub struct ParticleVisual {
    pub pos: Vec2,
    pub alpha: f32,
    /// Green channel of the stroke/fill colour, 180..=255.
    pub green: u8,
    pub size: f32,
    pub line_width: f32,
    /// Alpha of the halo disc; zero means skip the halo entirely.
    pub glow_alpha: f32,
    pub shape: ParticleShape,
}

pub struct FieldState {
    pub particles: Vec<Particle>,
    pub time: f32,
    rng: StdRng,
}

impl FieldState {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed the full set, replacing whatever is there.
    pub fn seed(&mut self, width: f32, height: f32) {
        self.particles.clear();
        for _ in 0..FIELD_PARTICLE_COUNT {
            let p = spawn_particle(&mut self.rng, width, height);
            self.particles.push(p);
        }
    }

    /// Resize hook: only a first-run (empty) field is seeded, so a window
    /// resize never restarts the animation mid-flow.
    pub fn seed_if_empty(&mut self, width: f32, height: f32) {
        if self.particles.is_empty() {
            self.seed(width, height);
        }
    }

    /// One simulation tick: move, wrap, apply pointer wake, emit visuals.
    /// `out` is cleared and refilled; mutation finishes before the caller
    /// draws anything.
    pub fn advance(
        &mut self,
        width: f32,
        height: f32,
        pointer: PointerState,
        out: &mut Vec<ParticleVisual>,
    ) {
        self.time += TIME_STEP;
        out.clear();

        for p in &mut self.particles {
            // River flow: constant leftward drift.
            p.pos.x -= p.speed;
            // Wavy vertical drift, phase-locked per particle.
            p.pos.y += (self.time * 2.0 + p.phase).sin() * p.drift + p.drift * 0.5;

            // Recycle past the left edge; re-enter just right of the canvas
            // with a fresh vertical position.
            if p.pos.x < -EXIT_MARGIN {
                p.pos.x = width + self.rng.gen::<f32>() * RESPAWN_BAND;
                p.pos.y = self.rng.gen::<f32>() * height;
            }
            if p.pos.y < -20.0 {
                p.pos.y = height + 10.0;
            }
            if p.pos.y > height + 20.0 {
                p.pos.y = -10.0;
            }

            // Pointer wake: squared falloff keeps the push sharp and local.
            let mut t = 0.0;
            if pointer.active {
                let delta = p.pos - pointer.pos;
                let dist = delta.length();
                t = pointer_influence(dist);
                if dist > 0.0 && t > 0.0 {
                    p.pos += delta / dist * (t * REPULSION_FORCE);
                }
            }

            out.push(particle_visual(p, self.time, t));
        }
    }
}

fn spawn_particle(rng: &mut StdRng, width: f32, height: f32) -> Particle {
    let shape = match rng.gen_range(0..3) {
        0 => ParticleShape::Plus,
        1 => ParticleShape::Dot,
        _ => ParticleShape::Diamond,
    };
    Particle {
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        speed: 0.4 + rng.gen::<f32>() * 1.2,
        drift: (rng.gen::<f32>() - 0.5) * 0.3,
        size: 3.0 + rng.gen::<f32>() * 7.0,
        phase: rng.gen::<f32>() * std::f32::consts::TAU,
        shape,
    }
}

/// Visual parameters as a function of the pulse clock and pointer
/// influence `t`: particles glow and enlarge near the cursor.
pub fn particle_visual(p: &Particle, time: f32, t: f32) -> ParticleVisual {
    let pulse = 0.5 + 0.5 * (time * 3.0 + p.phase).sin();
    let alpha = 0.05 + pulse * 0.06 + t * 0.6;
    let green = (180.0 + t * 75.0).round() as u8;
    let size = p.size + t * 5.0;
    let glow_alpha = if t > 0.2 { t * 0.35 } else { 0.0 };
    ParticleVisual {
        pos: p.pos,
        alpha,
        green,
        size,
        line_width: 0.8 + t * 0.8,
        glow_alpha,
        shape: p.shape,
    }
}

/// Pointer influence at `dist` pixels, 0 beyond the falloff radius.
/// Monotonically decreasing in distance.
pub fn pointer_influence(dist: f32) -> f32 {
    let t = (1.0 - dist / POINTER_INFLUENCE).max(0.0);
    t * t
}
