//! Straight-line path generation between two building positions
//!
//! The route has no awareness of walls, floors, or connectivity; it is a
//! placeholder for graph routing over the building's vertex map. Paths are
//! recomputed wholesale on every change to either endpoint, which is cheap
//! because the step count is small and bounded.

use nalgebra::Vector3;

use crate::core::Position3;
use crate::error::{NavError, NavResult};

/// Generate `steps + 1` waypoints from `start` to `end` by linear
/// interpolation. The first waypoint equals `start` and the last equals
/// `end`; `start == end` yields identical waypoints, which is valid.
///
/// `steps` must be at least 1.
pub fn generate_path(start: Position3, end: Position3, steps: u32) -> NavResult<Vec<Position3>> {
    if steps < 1 {
        return Err(NavError::DegeneratePath { steps });
    }

    let a: Vector3<f64> = start.into();
    let b: Vector3<f64> = end.into();
    let delta = b - a;

    let mut points = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        points.push(Position3::from(a + delta * t));
    }
    Ok(points)
}

/// Total length of a path: the sum of its segment lengths.
pub fn path_length(path: &[Position3]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PATH_STEPS;

    #[test]
    fn test_path_endpoints_and_length() {
        let start = Position3::new(0.0, 0.0, 0.0);
        let end = Position3::new(5.0, 0.0, 3.0);
        let path = generate_path(start, end, PATH_STEPS).unwrap();

        assert_eq!(path.len(), 11);
        assert_eq!(path[0], start);
        assert_eq!(path[10], end);

        // Midpoint of the straight line
        assert!((path[5].x - 2.5).abs() < 1e-12);
        assert!((path[5].z - 1.5).abs() < 1e-12);
        assert_eq!(path[5].y, 0.0);
    }

    #[test]
    fn test_coincident_endpoints_yield_identical_waypoints() {
        let p = Position3::new(-1.0, 2.0, 0.5);
        let path = generate_path(p, p, PATH_STEPS).unwrap();
        assert_eq!(path.len(), 11);
        assert!(path.iter().all(|w| *w == p));
    }

    #[test]
    fn test_zero_steps_is_rejected() {
        let a = Position3::origin();
        let b = Position3::new(1.0, 0.0, 0.0);
        assert_eq!(
            generate_path(a, b, 0),
            Err(NavError::DegeneratePath { steps: 0 })
        );
    }

    #[test]
    fn test_single_step_path() {
        let a = Position3::origin();
        let b = Position3::new(4.0, 0.0, 0.0);
        let path = generate_path(a, b, 1).unwrap();
        assert_eq!(path, vec![a, b]);
    }

    #[test]
    fn test_path_length_of_straight_line() {
        let a = Position3::origin();
        let b = Position3::new(3.0, 0.0, 4.0);
        let path = generate_path(a, b, PATH_STEPS).unwrap();
        // Straight segments sum to the endpoint distance
        assert!((path_length(&path) - 5.0).abs() < 1e-12);
    }
}
