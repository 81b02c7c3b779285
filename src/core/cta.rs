//! Floating call-to-action: scroll position decides which section is in
//! view and therefore which label/target/theme the button shows, and the
//! pointer pulls the button a few pixels toward itself while hovered.
//!
//! Section detection works off a precomputed offset table rebuilt on
//! resize, so the per-scroll path is a pure lookup with no DOM reads.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Page sections with their document-space start offsets, held in
/// bottom-to-top order (Contact first). Rebuilt only when layout changes.
#[derive(Clone, Debug, Default)]
pub struct SectionTable {
    entries: Vec<(Section, f64)>,
}

impl SectionTable {
    /// `offsets` in any order; stored sorted by start offset descending so
    /// lookup can take the first match.
    pub fn new(offsets: Vec<(Section, f64)>) -> Self {
        let mut entries = offsets;
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    /// Section whose start is at or above the viewport midpoint.
    /// Bottom-to-top priority; Home when nothing matched yet.
    pub fn active_section(&self, scroll_y: f64, viewport_h: f64) -> Section {
        let probe = scroll_y + viewport_h * 0.5;
        for &(section, start) in &self.entries {
            if probe >= start {
                return section;
            }
        }
        Section::Home
    }
}

/// The button only appears once the page has scrolled past 30% of a
/// viewport height.
pub fn cta_visible(scroll_y: f64, viewport_h: f64) -> bool {
    scroll_y > viewport_h * 0.3
}

/// Maximum magnetic displacement in CSS pixels.
pub const MAGNET_MAX: f32 = 6.0;

/// Pull-toward-pointer offset: the pointer's position relative to the
/// button centre, normalised by the half extents and clamped per axis.
/// Returns zero displacement at the centre, +-MAGNET_MAX at the rim.
pub fn magnet_offset(pointer: Vec2, center: Vec2, half_extent: Vec2) -> Vec2 {
    if half_extent.x <= 0.0 || half_extent.y <= 0.0 {
        return Vec2::ZERO;
    }
    let norm = (pointer - center) / half_extent;
    Vec2::new(
        (norm.x * MAGNET_MAX).clamp(-MAGNET_MAX, MAGNET_MAX),
        (norm.y * MAGNET_MAX).clamp(-MAGNET_MAX, MAGNET_MAX),
    )
}

/// Visual/label state of the button for one section.
#[derive(Clone, Copy, Debug)]
pub struct CtaTheme {
    pub label: &'static str,
    pub icon: &'static str,
    /// Anchor id the click scrolls to.
    pub target: &'static str,
    pub gradient: &'static str,
    pub glow: &'static str,
    pub glow_hover: &'static str,
}

const GREEN_GRADIENT: &str = "linear-gradient(135deg, #22c55e 0%, #4ade80 100%)";
const GREEN_GLOW: &str = "0 0 12px rgba(34,197,94,0.15), 0 4px 12px rgba(0,0,0,0.15)";
const GREEN_GLOW_HOVER: &str = "0 0 24px rgba(34,197,94,0.3), 0 6px 20px rgba(0,0,0,0.2)";

pub fn cta_theme(section: Section) -> CtaTheme {
    match section {
        Section::Home | Section::About => CtaTheme {
            label: "See My Work",
            icon: "\u{2193}",
            target: "projects",
            gradient: GREEN_GRADIENT,
            glow: GREEN_GLOW,
            glow_hover: GREEN_GLOW_HOVER,
        },
        Section::Skills => CtaTheme {
            label: "View Projects",
            icon: "\u{2192}",
            target: "projects",
            gradient: GREEN_GRADIENT,
            glow: GREEN_GLOW,
            glow_hover: GREEN_GLOW_HOVER,
        },
        Section::Projects => CtaTheme {
            label: "Let's Talk",
            icon: "\u{2709}",
            target: "contact",
            gradient: "linear-gradient(135deg, #3b82f6 0%, #60a5fa 100%)",
            glow: "0 0 12px rgba(59,130,246,0.15), 0 4px 12px rgba(0,0,0,0.15)",
            glow_hover: "0 0 24px rgba(59,130,246,0.3), 0 6px 20px rgba(0,0,0,0.2)",
        },
        Section::Contact => CtaTheme {
            label: "Back to Top",
            icon: "\u{2191}",
            target: "home",
            gradient: "linear-gradient(135deg, #a855f7 0%, #c084fc 100%)",
            glow: "0 0 12px rgba(168,85,247,0.15), 0 4px 12px rgba(0,0,0,0.15)",
            glow_hover: "0 0 24px rgba(168,85,247,0.3), 0 6px 20px rgba(0,0,0,0.2)",
        },
    }
}
