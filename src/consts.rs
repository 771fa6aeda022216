//! Shared numeric constants for the engine.

// ── Tolerance ───────────────────────────────────────────────────

/// Default coordinate equality tolerance in engine units.
pub const DEFAULT_EPSILON: f64 = 1e-9;

// ── Shape structure ─────────────────────────────────────────────

/// Fewest segments that can enclose an area.
pub const MIN_CLOSED_SEGMENTS: usize = 3;

/// Edges produced by decomposing one rectangle.
pub const RECT_EDGE_COUNT: usize = 4;

/// Fewest vertices in a walk that yields a centroid.
pub const MIN_CENTROID_VERTICES: usize = 2;
