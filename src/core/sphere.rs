//! Orbiting skill sphere: fixed golden-angle point layout plus the shared
//! drag/momentum rotation state.
//!
//! Points never move; only the two accumulated rotation angles do. The
//! renderer asks [`project_depth`] for each point's depth cue every frame.

use glam::{Vec2, Vec3};

/// Display radius of the sphere in CSS pixels.
pub const SPHERE_RADIUS: f32 = 220.0;
/// Golden angle, pi * (3 - sqrt(5)). The irrational step keeps the point
/// spiral free of visible banding at any count.
pub fn golden_angle() -> f32 {
    std::f32::consts::PI * (3.0 - 5.0_f32.sqrt())
}

/// Unit-sphere position for item `i` of `count`, evenly spaced from the
/// north pole (+1) to the south pole (-1) with a golden-angle spiral.
pub fn sphere_point(i: usize, count: usize) -> Vec3 {
    debug_assert!(count > 1 && i < count);
    let y = 1.0 - (i as f32 / (count - 1) as f32) * 2.0;
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle() * i as f32;
    Vec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y)
}

/// Depth cue for a point under the current rotation: opacity in
/// [0.15, 1], scale in [0.6, 1], and a paint-order index derived from
/// opacity. Rotation is applied X first, then Y; only the rotated Z is
/// needed, not a full projection.
#[derive(Clone, Copy, Debug)]
pub struct DepthCue {
    pub opacity: f32,
    pub scale: f32,
    pub z_index: i32,
}

pub fn project_depth(point: Vec3, rot_x_deg: f32, rot_y_deg: f32) -> DepthCue {
    let rx = rot_x_deg.to_radians();
    let ry = rot_y_deg.to_radians();
    let z1 = point.y * rx.sin() + point.z * rx.cos();
    let z2 = z1 * ry.cos() - point.x * ry.sin();
    let opacity = ((z2 + 1.2) / 2.2).max(0.15);
    DepthCue {
        opacity,
        scale: 0.6 + opacity * 0.4,
        z_index: (opacity * 100.0).floor() as i32,
    }
}

/// Friction applied to the momentum every idle frame.
pub const FRICTION: f32 = 0.98;
/// Momentum never decays below this magnitude per axis, so the sphere
/// keeps a slow idle spin forever after the first interaction.
pub const MOMENTUM_FLOOR: f32 = 0.05;
/// Pointer delta to rotation angle, degrees per pixel.
pub const DRAG_GAIN: f32 = 0.5;
/// Pointer delta to released momentum, degrees-per-frame per pixel.
pub const MOMENTUM_GAIN: f32 = 0.1;

/// Shared rotation state for one sphere. Angles are in degrees (they feed
/// CSS rotateX/rotateY directly); momentum is degrees per frame.
#[derive(Clone, Copy, Debug)]
pub struct OrbitState {
    pub rot_x_deg: f32,
    pub rot_y_deg: f32,
    /// (x-axis, y-axis) angular velocity while not dragging.
    pub momentum: Vec2,
    pub dragging: bool,
    last_pointer: Vec2,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            rot_x_deg: 0.0,
            rot_y_deg: 0.0,
            momentum: Vec2::new(0.5, 0.5),
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

impl OrbitState {
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.last_pointer = pointer;
    }

    /// Accumulate rotation from the pointer delta and record the
    /// instantaneous momentum for release. No-op unless dragging.
    pub fn drag_to(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = pointer - self.last_pointer;
        self.rot_y_deg += delta.x * DRAG_GAIN;
        self.rot_x_deg -= delta.y * DRAG_GAIN;
        self.momentum = Vec2::new(-delta.y * MOMENTUM_GAIN, delta.x * MOMENTUM_GAIN);
        self.last_pointer = pointer;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Idle physics step: apply momentum, decay it, clamp to the floor.
    /// Does nothing while a drag is active (the pointer drives directly).
    pub fn step(&mut self) {
        if self.dragging {
            return;
        }
        self.rot_x_deg += self.momentum.x;
        self.rot_y_deg += self.momentum.y;
        self.momentum *= FRICTION;
        self.momentum.x = clamp_to_floor(self.momentum.x);
        self.momentum.y = clamp_to_floor(self.momentum.y);
    }
}

// Sign-preserving floor; an exactly-zero component falls to the negative
// side.
fn clamp_to_floor(v: f32) -> f32 {
    if v.abs() < MOMENTUM_FLOOR {
        if v > 0.0 {
            MOMENTUM_FLOOR
        } else {
            -MOMENTUM_FLOOR
        }
    } else {
        v
    }
}

/// Minimum pairwise angular separation (radians) of the golden-angle
/// layout for a given item count.
pub fn min_pairwise_angle(count: usize) -> f32 {
    let mut min = std::f32::consts::PI;
    for i in 0..count {
        let a = sphere_point(i, count);
        for j in (i + 1)..count {
            let b = sphere_point(j, count);
            let cos = a.dot(b).clamp(-1.0, 1.0);
            min = min.min(cos.acos());
        }
    }
    min
}
