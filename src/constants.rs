/// Wiring and timing constants for the web layer.
///
/// Element ids are the contract with the page markup; a missing id means
/// the corresponding scene is skipped at init.
// Scene mount points
pub const FIELD_CANVAS_ID: &str = "about-canvas";
pub const MESH_CANVAS_ID: &str = "skills-canvas";
pub const SPHERE_SECTION_ID: &str = "skills";
pub const SPHERE_STAGE_ID: &str = "sphere-stage";

// Floating call-to-action
pub const CTA_WRAP_ID: &str = "floating-cta-wrap";
pub const CTA_BUTTON_ID: &str = "floating-cta";
pub const CTA_ICON_ID: &str = "floating-cta-icon";
pub const CTA_LABEL_ID: &str = "floating-cta-label";

// Project carousel
pub const PROJECT_LIST_ID: &str = "project-list";
pub const PROJECT_PANEL_ID: &str = "project-panel";
pub const PROJECT_CONTENT_ID: &str = "project-content";
pub const PROJECT_STATUS_ID: &str = "project-status";
pub const PROJECT_SUBTITLE_ID: &str = "project-subtitle";
pub const PROJECT_TITLE_ID: &str = "project-title";
pub const PROJECT_DESC_ID: &str = "project-desc";
pub const PROJECT_TAGS_ID: &str = "project-tags";
pub const PROJECT_LINK_ID: &str = "project-link";
pub const PANEL_GLOW_ID: &str = "panel-glow";
pub const CYCLE_PROGRESS_ID: &str = "cycle-progress";
pub const CYCLE_COUNTER_ID: &str = "cycle-counter";

// Contact form
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_INTENTS_ID: &str = "contact-intents";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const SIGNAL_BAR_ID: &str = "signal-bar";
pub const SIGNAL_VALUE_ID: &str = "signal-value";

// Navigation / misc
pub const NAV_ID: &str = "site-nav";
pub const CLOCK_ID: &str = "local-time";
pub const COPY_EMAIL_ID: &str = "copy-email";

// Scroll thresholds (CSS pixels)
pub const NAV_CONDENSE_SCROLL_PX: f64 = 20.0;

// Timers
pub const CLOCK_INTERVAL_MS: i32 = 60_000;
/// Simulated delivery latency of the contact send.
pub const SEND_LATENCY_MS: i32 = 2_000;
/// How long the "sent" confirmation stays before reverting to idle.
pub const SENT_REVERT_MS: i32 = 5_000;

// Deterministic seeds for the particle scenes
pub const FIELD_SEED: u64 = 42;
pub const MESH_SEED: u64 = 7;
