//! Oblique projection from building coordinates to screen space
//!
//! The renderer draws markers on a flat surface, so the engine maps the
//! horizontal plane directly onto the screen: x to the horizontal axis, z to
//! the vertical axis, and the floor height y becomes a depth hint the
//! renderer applies as a translation along its simulated depth axis. This is
//! a deliberate oblique mapping, not a perspective camera.

use crate::core::{Position3, PROJECTION_CENTER_X, PROJECTION_CENTER_Y, PROJECTION_SCALE};

/// Screen-space placement of a projected position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenAnchor {
    /// Pixels from the left screen edge.
    pub left: f64,
    /// Pixels from the top screen edge.
    pub top: f64,
    /// Depth cue in pixels, derived from floor height.
    pub depth_offset: f64,
}

/// Pure, deterministic projector with a fixed scale and screen center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjector {
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl ScreenProjector {
    pub fn new(scale: f64, center_x: f64, center_y: f64) -> Self {
        Self { scale, center_x, center_y }
    }

    /// Project a position. Total over all real inputs; never fails.
    pub fn project(&self, position: Position3) -> ScreenAnchor {
        ScreenAnchor {
            left: self.center_x + position.x * self.scale,
            top: self.center_y + position.z * self.scale,
            depth_offset: position.y * self.scale,
        }
    }

    /// Project a whole path into the polyline the renderer strokes.
    pub fn project_path(&self, path: &[Position3]) -> Vec<ScreenAnchor> {
        path.iter().map(|p| self.project(*p)).collect()
    }
}

impl Default for ScreenProjector {
    fn default() -> Self {
        Self::new(PROJECTION_SCALE, PROJECTION_CENTER_X, PROJECTION_CENTER_Y)
    }
}
