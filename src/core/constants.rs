//! Fixed engine parameters
//!
//! Values match the original building survey tooling so recorded sessions
//! replay identically.

/// Number of interpolation segments in a generated path; the path itself
/// holds `PATH_STEPS + 1` waypoints.
pub const PATH_STEPS: u32 = 10;

/// Scale factor from building units to screen pixels.
pub const PROJECTION_SCALE: f64 = 40.0;

/// Screen-space center of the projection (pixels).
pub const PROJECTION_CENTER_X: f64 = 300.0;
pub const PROJECTION_CENTER_Y: f64 = 300.0;

/// Period between drift ticks while navigating (milliseconds).
pub const DRIFT_PERIOD_MS: u64 = 1000;

/// Half-width of the per-tick drift perturbation on x and z. Each tick moves
/// the position by `(r - 0.5) * DRIFT_MAGNITUDE` per axis, r uniform in [0,1).
pub const DRIFT_MAGNITUDE: f64 = 0.1;

/// Simulated acquisition latency of a relocation scan (milliseconds).
pub const SCAN_DELAY_MS: u64 = 1500;

/// Half-extent of the square a scan samples the new position from:
/// x and z land uniformly in [-SCAN_RANGE, SCAN_RANGE], y stays 0.
pub const SCAN_RANGE: f64 = 2.0;
