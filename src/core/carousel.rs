//! Auto-cycling project showcase. The clock is passed in as milliseconds
//! on every poll, never read here, so the whole machine runs under test
//! with a synthetic clock.

use glam::Vec2;

/// One full cycle per project, in milliseconds.
pub const CYCLE_MS: f64 = 5000.0;
/// Progress poll cadence used by the host scene.
pub const POLL_INTERVAL_MS: i32 = 30;

pub struct CycleState {
    pub index: usize,
    pub count: usize,
    /// Elapsed fraction of the current cycle, 0..=1.
    pub progress: f64,
    pub hovering: bool,
    /// Bumped whenever the shown project changes, to restart the content
    /// enter-transition.
    pub anim_key: u64,
    /// Pointer position inside the detail panel in unit coordinates,
    /// feeding the parallax glow. Centre when the pointer is away.
    pub glow_pos: Vec2,
    start_ms: f64,
}

impl CycleState {
    pub fn new(count: usize, now_ms: f64) -> Self {
        debug_assert!(count > 0);
        Self {
            index: 0,
            count,
            progress: 0.0,
            hovering: false,
            anim_key: 0,
            glow_pos: Vec2::new(0.5, 0.5),
            start_ms: now_ms,
        }
    }

    /// Periodic poll. While hovered the cycle is frozen at the captured
    /// fraction. Otherwise recompute progress from the clock and advance
    /// to the next project when a full cycle has elapsed.
    pub fn poll(&mut self, now_ms: f64) {
        if self.hovering {
            return;
        }
        let pct = (now_ms - self.start_ms) / CYCLE_MS;
        if pct >= 1.0 {
            self.index = (self.index + 1) % self.count;
            self.anim_key += 1;
            self.start_ms = now_ms;
            self.progress = 0.0;
        } else {
            self.progress = pct;
        }
    }

    /// Pointer entered the detail panel: freeze with the current fraction
    /// preserved.
    pub fn pause(&mut self) {
        self.hovering = true;
    }

    /// Pointer left: resume as if the cycle had never stopped by
    /// back-dating the start, so the progress bar continues seamlessly.
    pub fn resume(&mut self, now_ms: f64) {
        self.hovering = false;
        self.start_ms = now_ms - self.progress * CYCLE_MS;
    }

    /// Manual selection from the project list; equivalent to the cycle
    /// completing early on the chosen index.
    pub fn select(&mut self, index: usize, now_ms: f64) {
        if index >= self.count {
            return;
        }
        self.index = index;
        self.progress = 0.0;
        self.start_ms = now_ms;
        self.anim_key += 1;
    }

    /// Direct pointer-to-glow mapping; no physics.
    pub fn set_glow(&mut self, unit_pos: Vec2) {
        self.glow_pos = unit_pos;
    }

    pub fn clear_glow(&mut self) {
        self.glow_pos = Vec2::new(0.5, 0.5);
    }
}
