//! Shared numeric constants for layout, parsing, and configuration.

// ── Layout ──────────────────────────────────────────────────────

/// Inward margin of a region, as a fraction of the space available to it.
pub const REGION_MARGIN: f64 = 0.1;

/// Drawn size of a region, as a fraction of the space available to it.
pub const REGION_FILL: f64 = 0.8;

/// Angle at which a spell's divider meets its circle.
pub const SPELL_DIVIDER_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

// ── Triangle rotations ──────────────────────────────────────────

pub const TARGET_ROTATION: f64 = 0.0;
pub const DURATION_ROTATION: f64 = std::f64::consts::PI;
pub const RESTRICTION_ROTATION: f64 = -std::f64::consts::FRAC_PI_2;

// ── Defaults ────────────────────────────────────────────────────

/// Edge length of the bounding square a diagram is drawn into.
pub const DEFAULT_SIDE: f64 = 500.0;

/// Deepest group nesting the parser accepts.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Directory glyph files are read from.
pub const DEFAULT_ASSET_DIR: &str = "runes";
