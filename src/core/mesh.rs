//! Secondary particle layer behind the skill sphere: slow drifters joined
//! by lines whenever two of them come close. Independent of the sphere
//! state; the only inputs are the canvas extent and the tick itself.

use glam::Vec2;
use rand::prelude::*;

pub const MESH_PARTICLE_COUNT: usize = 70;
/// Particles closer than this (pixels) get a connecting line.
pub const LINK_DISTANCE: f32 = 160.0;

#[derive(Clone, Copy, Debug)]
pub struct MeshParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// A line between two particles this frame; width thins with distance.
#[derive(Clone, Copy, Debug)]
pub struct MeshLink {
    pub a: Vec2,
    pub b: Vec2,
    pub width: f32,
}

pub struct MeshState {
    pub particles: Vec<MeshParticle>,
}

impl MeshState {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..MESH_PARTICLE_COUNT)
            .map(|_| MeshParticle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 0.5,
                    (rng.gen::<f32>() - 0.5) * 0.5,
                ),
                size: rng.gen::<f32>() * 3.0 + 1.0,
            })
            .collect();
        Self { particles }
    }

    /// Drift every particle and wrap it at all four edges.
    pub fn advance(&mut self, width: f32, height: f32) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = width;
            }
            if p.pos.x > width {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = height;
            }
            if p.pos.y > height {
                p.pos.y = 0.0;
            }
        }
    }

    /// Emit one link per pair within [`LINK_DISTANCE`]. Each pair is
    /// visited once (j > i), so links are never doubled.
    pub fn links(&self, out: &mut Vec<MeshLink>) {
        out.clear();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let dist = a.distance(b);
                if dist < LINK_DISTANCE {
                    out.push(MeshLink {
                        a,
                        b,
                        width: 1.0 - dist / LINK_DISTANCE,
                    });
                }
            }
        }
    }
}
