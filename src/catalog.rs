//! Static destination reference data
//!
//! The catalog is loaded once at startup and never mutated afterwards. The
//! built-in set mirrors the building survey shipped with the app; deployments
//! with their own survey can load a JSON catalog instead.

use std::fs;
use std::path::Path;

use crate::core::{Destination, PointOfInterest, Position3};
use crate::error::{NavError, NavResult};

/// Immutable set of selectable destinations and decorative points of
/// interest.
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
    points_of_interest: Vec<PointOfInterest>,
}

impl DestinationCatalog {
    /// The built-in building survey.
    pub fn builtin() -> Self {
        Self {
            destinations: vec![
                Destination::new("entrance", "Main Entrance", "Ground Floor", Position3::new(0.0, 0.0, 0.0)),
                Destination::new("cafeteria", "Cafeteria", "Ground Floor", Position3::new(5.0, 0.0, 3.0)),
                Destination::new("library", "Library", "First Floor", Position3::new(-3.0, 0.0, 4.0)),
                Destination::new("auditorium", "Auditorium", "Ground Floor", Position3::new(8.0, 0.0, -2.0)),
                Destination::new("lab", "Computer Lab", "Second Floor", Position3::new(-5.0, 0.0, -3.0)),
            ],
            points_of_interest: vec![
                PointOfInterest {
                    name: "Shop".to_string(),
                    position: Position3::new(3.0, 0.5, 2.0),
                },
                PointOfInterest {
                    name: "Restroom".to_string(),
                    position: Position3::new(-2.0, 0.5, -3.0),
                },
            ],
        }
    }

    /// Parse a catalog from a JSON array of destination records. Points of
    /// interest stay the built-in set.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let destinations: Vec<Destination> =
            serde_json::from_str(json).map_err(|e| NavError::CatalogFormat {
                details: e.to_string(),
            })?;
        if destinations.is_empty() {
            return Err(NavError::CatalogFormat {
                details: "catalog contains no destinations".to_string(),
            });
        }
        Ok(Self {
            destinations,
            points_of_interest: Self::builtin().points_of_interest,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| NavError::CatalogFormat {
            details: format!(
                "failed to read catalog file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_json(&content)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn points_of_interest(&self) -> &[PointOfInterest] {
        &self.points_of_interest
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Look up a destination by id.
    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = DestinationCatalog::builtin();
        assert_eq!(catalog.len(), 5);

        let cafeteria = catalog.find("cafeteria").unwrap();
        assert_eq!(cafeteria.name, "Cafeteria");
        assert_eq!(cafeteria.floor, "Ground Floor");
        assert_eq!(cafeteria.position, Position3::new(5.0, 0.0, 3.0));

        let lab = catalog.find("lab").unwrap();
        assert_eq!(lab.position, Position3::new(-5.0, 0.0, -3.0));

        assert_eq!(catalog.points_of_interest().len(), 2);
    }

    #[test]
    fn test_find_unknown_id() {
        let catalog = DestinationCatalog::builtin();
        assert!(catalog.find("rooftop").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "gate-a", "name": "Gate A", "floor": "Ground Floor",
             "position": {"x": 1.0, "y": 0.0, "z": -4.0}}
        ]"#;
        let catalog = DestinationCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("gate-a").unwrap().position.z, -4.0);
    }

    #[test]
    fn test_from_json_rejects_garbage_and_empty() {
        assert!(matches!(
            DestinationCatalog::from_json("not json"),
            Err(NavError::CatalogFormat { .. })
        ));
        assert!(matches!(
            DestinationCatalog::from_json("[]"),
            Err(NavError::CatalogFormat { .. })
        ));
    }
}
