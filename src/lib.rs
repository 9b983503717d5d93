//! Indoor Wayfinding Engine
//!
//! Positioning and path rendering core for an indoor wayfinding overlay:
//! tracks a simulated user position inside a building, computes a waypoint
//! path to a chosen destination, and projects both into 2D screen space for
//! the scene renderer. Movement is simulated (bounded drift plus scan
//! relocation); there is no real sensor fusion or building-graph routing.

pub mod core;
pub mod error;
pub mod projection;
pub mod path;
pub mod simulation;
pub mod catalog;
pub mod engine;

// Re-export commonly used types
pub use core::{Destination, PointOfInterest, Position3};
pub use core::{DRIFT_MAGNITUDE, DRIFT_PERIOD_MS, PATH_STEPS, SCAN_DELAY_MS, SCAN_RANGE};
pub use catalog::DestinationCatalog;
pub use engine::{Mode, NavSnapshot, NavigationEngine};
pub use error::{NavError, NavResult};
pub use path::{generate_path, path_length};
pub use projection::{ScreenAnchor, ScreenProjector};
pub use simulation::{DriftSimulator, DriftStep, ScanTask};
