//! Error classification for the wayfinding engine
//!
//! The taxonomy is deliberately small: the domain is simulated, so every
//! failure is local and recoverable. Rejected intents leave state unchanged.

use std::fmt;

/// Result type for engine operations
pub type NavResult<T> = Result<T, NavError>;

/// Engine error types
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// An intent referenced a destination id not present in the catalog
    UnknownDestination { id: String },
    /// A path was requested with fewer than one interpolation segment
    DegeneratePath { steps: u32 },
    /// A destination catalog failed to parse
    CatalogFormat { details: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownDestination { id } => {
                write!(f, "unknown destination id '{}'", id)
            }
            NavError::DegeneratePath { steps } => {
                write!(f, "degenerate path request: steps = {} (minimum 1)", steps)
            }
            NavError::CatalogFormat { details } => {
                write!(f, "destination catalog format error: {}", details)
            }
        }
    }
}

impl std::error::Error for NavError {}
