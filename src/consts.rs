//! Shared numeric constants for the crate.

// ── Beam ────────────────────────────────────────────────────────

/// Distance a beam travels from its emitter, in CSS pixels.
pub const BEAM_LENGTH: f64 = 200.0;

/// Fill color of a beam when none is configured.
pub const DEFAULT_BEAM_COLOR: &str = "red";

// ── Sampling ────────────────────────────────────────────────────

/// Grid spacing between beam samples handed to the DOM hit-test.
pub const DEFAULT_SAMPLE_GAP: f64 = 1.0;

// ── Containment ─────────────────────────────────────────────────

/// Tolerance for treating a point as lying on a polygon edge.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// Largest coordinate magnitude [`crate::polygon::rasterize`] accepts. Below
/// 2^52 every integer and its successor are distinct `f64` values.
pub const MAX_GRID_COORD: f64 = 4_503_599_627_370_496.0;
