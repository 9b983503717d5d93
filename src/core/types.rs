//! Core data types for the wayfinding engine

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// 3D position in building-relative units.
///
/// `y` is vertical (floor height); `x` and `z` span the horizontal plane.
/// No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Origin of the building frame.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to another position (3D).
    pub fn distance_to(&self, other: &Position3) -> f64 {
        (Vector3::from(*other) - Vector3::from(*self)).norm()
    }
}

impl From<Position3> for Vector3<f64> {
    fn from(p: Position3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for Position3 {
    fn from(v: Vector3<f64>) -> Self {
        Position3::new(v.x, v.y, v.z)
    }
}

/// A selectable destination inside the building.
///
/// Destinations are static reference data; they are never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique identifier, e.g. `"cafeteria"`.
    pub id: String,
    /// Display name shown to the user.
    pub name: String,
    /// Floor label, e.g. `"Ground Floor"`.
    pub floor: String,
    /// Fixed position of the destination.
    pub position: Position3,
}

impl Destination {
    pub fn new(id: &str, name: &str, floor: &str, position: Position3) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            floor: floor.to_string(),
            position,
        }
    }
}

/// A labelled point of interest rendered alongside the scene, not routable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub position: Position3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_zero_to_self() {
        let p = Position3::new(1.5, -2.0, 7.25);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position3::new(0.0, 0.0, 0.0);
        let b = Position3::new(5.0, 0.0, 3.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        // sqrt(25 + 9)
        assert!((a.distance_to(&b) - 34.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_vector_roundtrip() {
        let p = Position3::new(-3.0, 0.5, 4.0);
        let v: Vector3<f64> = p.into();
        assert_eq!(Position3::from(v), p);
    }
}
