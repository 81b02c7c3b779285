// Host-side tests for the ambient particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/field.rs"]
mod field;

use field::*;
use glam::Vec2;

const W: f32 = 800.0;
const H: f32 = 400.0;

fn seeded_field() -> FieldState {
    let mut state = FieldState::new(42);
    state.seed(W, H);
    state
}

fn no_pointer() -> PointerState {
    PointerState::default()
}

#[test]
fn seed_fills_the_full_set_within_bounds() {
    let state = seeded_field();
    assert_eq!(state.particles.len(), FIELD_PARTICLE_COUNT);
    for p in &state.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < W, "x out of canvas: {}", p.pos.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < H, "y out of canvas: {}", p.pos.y);
        assert!(p.speed >= 0.4 && p.speed < 1.6, "speed out of range: {}", p.speed);
        assert!(p.drift.abs() <= 0.15, "drift out of range: {}", p.drift);
        assert!(p.size >= 3.0 && p.size < 10.0, "size out of range: {}", p.size);
        assert!(p.phase >= 0.0 && p.phase < std::f32::consts::TAU);
    }
}

#[test]
fn seed_if_empty_never_reseeds_a_live_field() {
    let mut state = seeded_field();
    let before: Vec<Vec2> = state.particles.iter().map(|p| p.pos).collect();
    state.seed_if_empty(W, H);
    let after: Vec<Vec2> = state.particles.iter().map(|p| p.pos).collect();
    assert_eq!(before, after, "resize must not restart the animation");
}

#[test]
fn particles_drift_left_every_tick() {
    let mut state = seeded_field();
    // Isolate horizontal motion.
    for p in &mut state.particles {
        p.drift = 0.0;
    }
    let x_before: Vec<f32> = state.particles.iter().map(|p| p.pos.x).collect();
    let mut out = Vec::new();
    state.advance(W, H, no_pointer(), &mut out);
    for (p, x0) in state.particles.iter().zip(&x_before) {
        assert!(
            (x0 - p.pos.x - p.speed).abs() < 1e-5,
            "expected leftward step by speed"
        );
    }
}

#[test]
fn left_exit_respawns_in_the_right_band_with_fresh_y() {
    let mut out = Vec::new();
    // Collect respawn samples; the band and the y distribution should
    // match a fresh spawn.
    for seed in 0..20u64 {
        let mut state = FieldState::new(seed);
        state.seed(W, H);
        state.particles[0].pos.x = -EXIT_MARGIN - 5.0;
        state.particles[0].drift = 0.0;
        let y_before = state.particles[0].pos.y;
        state.advance(W, H, no_pointer(), &mut out);
        let p = &state.particles[0];
        assert_ne!(p.pos.y, y_before, "respawn should re-roll y");
        assert!(
            p.pos.x >= W && p.pos.x < W + RESPAWN_BAND,
            "respawn outside the band: {}",
            p.pos.x
        );
        assert!(p.pos.y >= 0.0 && p.pos.y < H, "respawn y off canvas: {}", p.pos.y);
    }
}

#[test]
fn vertical_exits_wrap_to_the_opposite_edge() {
    let mut state = seeded_field();
    state.particles[0].pos.y = -30.0;
    state.particles[0].drift = 0.0;
    state.particles[1].pos.y = H + 30.0;
    state.particles[1].drift = 0.0;
    // Keep both away from the horizontal exit.
    state.particles[0].pos.x = W / 2.0;
    state.particles[1].pos.x = W / 2.0;
    let mut out = Vec::new();
    state.advance(W, H, no_pointer(), &mut out);
    assert_eq!(state.particles[0].pos.y, H + 10.0);
    assert_eq!(state.particles[1].pos.y, -10.0);
}

#[test]
fn influence_is_zero_beyond_the_radius() {
    assert_eq!(pointer_influence(POINTER_INFLUENCE), 0.0);
    assert_eq!(pointer_influence(POINTER_INFLUENCE + 100.0), 0.0);
}

#[test]
fn influence_is_squared_falloff() {
    // Halfway in, linear falloff is 0.5, squared is 0.25.
    let t = pointer_influence(POINTER_INFLUENCE / 2.0);
    assert!((t - 0.25).abs() < 1e-6, "expected 0.25, got {t}");
}

#[test]
fn influence_is_monotonically_decreasing_in_distance() {
    let mut prev = pointer_influence(0.0);
    assert!((prev - 1.0).abs() < 1e-6);
    for d in 1..=200 {
        let t = pointer_influence(d as f32);
        assert!(
            t <= prev,
            "influence increased between {} and {} px",
            d - 1,
            d
        );
        prev = t;
    }
}

#[test]
fn closer_particles_are_pushed_harder() {
    let mut state = FieldState::new(7);
    state.seed(W, H);
    let pointer = PointerState {
        pos: Vec2::new(400.0, 200.0),
        active: true,
    };
    // Two probes straight right of the pointer, both inside the radius,
    // with all autonomous motion removed.
    for (i, dist) in [(0usize, 50.0f32), (1usize, 120.0f32)] {
        state.particles[i].pos = pointer.pos + Vec2::new(dist, 0.0);
        state.particles[i].speed = 0.0;
        state.particles[i].drift = 0.0;
    }
    let mut out = Vec::new();
    state.advance(W, H, pointer, &mut out);
    let push_near = state.particles[0].pos.x - (pointer.pos.x + 50.0);
    let push_far = state.particles[1].pos.x - (pointer.pos.x + 120.0);
    assert!(push_near > 0.0 && push_far > 0.0, "both should move away");
    assert!(
        push_near >= push_far,
        "repulsion must not grow with distance: near {push_near}, far {push_far}"
    );
}

#[test]
fn push_is_directed_away_from_the_pointer() {
    let mut state = FieldState::new(9);
    state.seed(W, H);
    let pointer = PointerState {
        pos: Vec2::new(400.0, 200.0),
        active: true,
    };
    state.particles[0].pos = pointer.pos + Vec2::new(-30.0, -40.0);
    state.particles[0].speed = 0.0;
    state.particles[0].drift = 0.0;
    let before = state.particles[0].pos;
    let dist_before = before.distance(pointer.pos);
    let mut out = Vec::new();
    state.advance(W, H, pointer, &mut out);
    let dist_after = state.particles[0].pos.distance(pointer.pos);
    assert!(
        dist_after > dist_before,
        "particle should move away: {dist_before} -> {dist_after}"
    );
}

#[test]
fn time_advances_by_a_fixed_step() {
    let mut state = seeded_field();
    let mut out = Vec::new();
    for i in 1..=10 {
        state.advance(W, H, no_pointer(), &mut out);
        assert!((state.time - i as f32 * TIME_STEP).abs() < 1e-5);
    }
}

#[test]
fn visuals_cover_every_particle_with_sane_ranges() {
    let mut state = seeded_field();
    let mut out = Vec::new();
    state.advance(W, H, no_pointer(), &mut out);
    assert_eq!(out.len(), state.particles.len());
    for v in &out {
        assert!(v.alpha > 0.0 && v.alpha <= 1.0, "alpha {}", v.alpha);
        assert!(v.green >= 180, "green {}", v.green);
        assert!(v.size > 0.0);
        assert!(v.line_width >= 0.8);
        // No pointer, so no halos anywhere.
        assert_eq!(v.glow_alpha, 0.0);
    }
}

#[test]
fn pointer_proximity_brightens_and_enlarges() {
    let mut state = FieldState::new(3);
    state.seed(W, H);
    let pointer = PointerState {
        pos: Vec2::new(400.0, 200.0),
        active: true,
    };
    state.particles[0].pos = pointer.pos + Vec2::new(10.0, 0.0);
    state.particles[0].speed = 0.0;
    state.particles[0].drift = 0.0;
    let base_size = state.particles[0].size;
    let mut out = Vec::new();
    state.advance(W, H, pointer, &mut out);
    let v = &out[0];
    assert!(v.green > 180, "near particle should shift colour");
    assert!(v.size > base_size, "near particle should enlarge");
    assert!(v.glow_alpha > 0.0, "near particle should get a halo");
}
