//! Shared numeric constants for the easel crate.

// ── Capture ─────────────────────────────────────────────────────

/// Minimum distance in surface pixels between two captured points.
/// Moves closer than this to the last captured point are dropped.
pub const MIN_POINT_DISTANCE: f64 = 3.0;

// ── Surface ─────────────────────────────────────────────────────

/// Drawing surface width in CSS pixels.
pub const SURFACE_WIDTH: f64 = 800.0;

/// Drawing surface height in CSS pixels.
pub const SURFACE_HEIGHT: f64 = 400.0;

// ── Pen ─────────────────────────────────────────────────────────

/// Default pen width in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Pen color used when the host supplies none (or a malformed one).
pub const FALLBACK_PEN_COLOR: &str = "#1f1a17";
