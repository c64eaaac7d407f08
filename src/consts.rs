//! Shared numeric constants for the geometry engine.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the viewport helpers will produce.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor the viewport helpers will produce.
pub const MAX_ZOOM: f64 = 3.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Default virtual canvas width in canvas pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 4000.0;

/// Default virtual canvas height in canvas pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 4000.0;

// ── Placement ───────────────────────────────────────────────────

/// Step between auto-placement candidates, in canvas pixels.
pub const DEFAULT_GRID_STEP: f64 = 50.0;

/// Gap kept between a newly placed item and its neighbours.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Diagonal offset between successive fallback cascade slots.
pub const CASCADE_STEP: f64 = 30.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// On-screen edge length of a layout fixture marker, independent of zoom.
pub const FIXTURE_SIZE_PX: f64 = 40.0;

// ── Recalibration ───────────────────────────────────────────────

/// Slack allowed when re-validating shifted rectangles against canvas bounds.
pub const BOUNDS_EPSILON: f64 = 1e-9;
