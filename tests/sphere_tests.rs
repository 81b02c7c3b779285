// Host-side tests for the skill sphere layout and orbit physics.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/sphere.rs"]
mod sphere;

use glam::Vec2;
use sphere::*;

const K: usize = 16;

#[test]
fn golden_angle_value() {
    let phi = golden_angle();
    assert!((phi - 2.399_963).abs() < 1e-5, "got {phi}");
}

#[test]
fn points_lie_on_the_unit_sphere() {
    for i in 0..K {
        let p = sphere_point(i, K);
        assert!(
            (p.length() - 1.0).abs() < 1e-5,
            "point {i} off the unit sphere: |p| = {}",
            p.length()
        );
    }
}

#[test]
fn points_span_pole_to_pole() {
    let first = sphere_point(0, K);
    let last = sphere_point(K - 1, K);
    assert!((first.y - 1.0).abs() < 1e-6, "first point at the north pole");
    assert!((last.y + 1.0).abs() < 1e-6, "last point at the south pole");
    // Strictly decreasing polar height in between.
    let mut prev = first.y;
    for i in 1..K {
        let y = sphere_point(i, K).y;
        assert!(y < prev, "y not decreasing at index {i}");
        prev = y;
    }
}

#[test]
fn golden_angle_spacing_never_collapses() {
    let min = min_pairwise_angle(K);
    assert!(
        min > 0.25,
        "minimum pairwise separation too small: {min} rad"
    );
}

#[test]
fn uniform_angular_step_would_collapse_by_comparison() {
    // Sanity check on the diagnostic itself: the same latitudes with a
    // uniform theta step of pi produce near-coincident azimuths, which
    // the golden-angle layout avoids.
    let mut min = std::f32::consts::PI;
    for i in 0..K {
        let y = 1.0 - (i as f32 / (K - 1) as f32) * 2.0;
        let r = (1.0 - y * y).max(0.0).sqrt();
        let theta = std::f32::consts::PI * i as f32;
        let a = glam::Vec3::new(theta.cos() * r, y, theta.sin() * r);
        for j in (i + 1)..K {
            let yj = 1.0 - (j as f32 / (K - 1) as f32) * 2.0;
            let rj = (1.0 - yj * yj).max(0.0).sqrt();
            let tj = std::f32::consts::PI * j as f32;
            let b = glam::Vec3::new(tj.cos() * rj, yj, tj.sin() * rj);
            min = min.min(a.dot(b).clamp(-1.0, 1.0).acos());
        }
    }
    assert!(min < min_pairwise_angle(K), "golden angle should spread points wider");
}

#[test]
fn momentum_decays_toward_the_floor_but_never_below() {
    let mut orbit = OrbitState::default();
    orbit.momentum = Vec2::new(5.0, -3.0);
    let mut prev_mag = orbit.momentum.x.abs();
    for frame in 0..2000 {
        orbit.step();
        let mx = orbit.momentum.x;
        let my = orbit.momentum.y;
        assert!(
            mx.abs() >= MOMENTUM_FLOOR - 1e-6,
            "x momentum stalled below the floor at frame {frame}: {mx}"
        );
        assert!(
            my.abs() >= MOMENTUM_FLOOR - 1e-6,
            "y momentum stalled below the floor at frame {frame}: {my}"
        );
        assert!(mx != 0.0 && my != 0.0, "momentum must never be exactly zero");
        assert!(mx.abs() <= prev_mag + 1e-6, "magnitude should not grow");
        prev_mag = mx.abs();
    }
    // Asymptote reached: both axes sit at the floor, signs preserved.
    assert!((orbit.momentum.x - MOMENTUM_FLOOR).abs() < 1e-6);
    assert!((orbit.momentum.y + MOMENTUM_FLOOR).abs() < 1e-6);
}

#[test]
fn idle_sphere_keeps_rotating_at_the_floor() {
    let mut orbit = OrbitState::default();
    orbit.momentum = Vec2::new(MOMENTUM_FLOOR, MOMENTUM_FLOOR);
    let before = orbit.rot_y_deg;
    for _ in 0..100 {
        orbit.step();
    }
    assert!(
        orbit.rot_y_deg > before,
        "idle rotation must keep accumulating"
    );
}

#[test]
fn drag_accumulates_rotation_and_records_momentum() {
    let mut orbit = OrbitState::default();
    orbit.begin_drag(Vec2::new(100.0, 100.0));
    orbit.drag_to(Vec2::new(110.0, 95.0));
    assert!((orbit.rot_y_deg - 5.0).abs() < 1e-6, "y angle from dx * 0.5");
    assert!((orbit.rot_x_deg - 2.5).abs() < 1e-6, "x angle from -dy * 0.5");
    assert!((orbit.momentum.x - 0.5).abs() < 1e-6);
    assert!((orbit.momentum.y - 1.0).abs() < 1e-6);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut orbit = OrbitState::default();
    orbit.drag_to(Vec2::new(500.0, 500.0));
    assert_eq!(orbit.rot_x_deg, 0.0);
    assert_eq!(orbit.rot_y_deg, 0.0);
}

#[test]
fn physics_step_is_suspended_while_dragging() {
    let mut orbit = OrbitState::default();
    orbit.momentum = Vec2::new(2.0, 2.0);
    orbit.begin_drag(Vec2::new(0.0, 0.0));
    let (rx, ry) = (orbit.rot_x_deg, orbit.rot_y_deg);
    orbit.step();
    assert_eq!((rx, ry), (orbit.rot_x_deg, orbit.rot_y_deg));
    assert_eq!(orbit.momentum, Vec2::new(2.0, 2.0), "no friction mid-drag");
    orbit.end_drag();
    orbit.step();
    assert_ne!((rx, ry), (orbit.rot_x_deg, orbit.rot_y_deg));
}

#[test]
fn depth_cue_ranges_hold_under_arbitrary_rotation() {
    for i in 0..K {
        let p = sphere_point(i, K);
        for step in 0..40 {
            let rx = step as f32 * 37.0;
            let ry = step as f32 * -23.0;
            let cue = project_depth(p, rx, ry);
            assert!(
                (0.15..=1.0 + 1e-4).contains(&cue.opacity),
                "opacity out of range: {}",
                cue.opacity
            );
            assert!(
                (0.6..=1.0 + 1e-4).contains(&cue.scale),
                "scale out of range: {}",
                cue.scale
            );
            assert!((0..=100).contains(&cue.z_index));
        }
    }
}

#[test]
fn unrotated_depth_reads_the_raw_z() {
    let p = glam::Vec3::new(0.0, 0.0, 1.0);
    let cue = project_depth(p, 0.0, 0.0);
    assert!((cue.opacity - 1.0).abs() < 1e-6, "front point fully opaque");
    let back = project_depth(glam::Vec3::new(0.0, 0.0, -1.0), 0.0, 0.0);
    assert!(
        (back.opacity - 0.15).abs() < 1e-6,
        "back point clamps to the opacity floor"
    );
}

#[test]
fn closer_points_paint_on_top() {
    let front = project_depth(glam::Vec3::new(0.0, 0.0, 1.0), 0.0, 0.0);
    let back = project_depth(glam::Vec3::new(0.0, 0.0, -1.0), 0.0, 0.0);
    assert!(front.z_index > back.z_index);
}
