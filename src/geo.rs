//! Geographic coordinates and the location-provider seam.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// One-shot source of the user's current position.
///
/// The request either resolves to coordinates or fails; there is no retry,
/// timeout, or cancellation. A provider that never returns blocks startup.
pub trait LocationProvider {
    /// Resolve the user's current position.
    fn current_position(&mut self) -> Result<Coordinates, PositionError>;
}

/// Errors from a position request.
#[derive(Debug, Error)]
pub enum PositionError {
    /// The user or platform refused the request.
    #[error("position request denied")]
    Denied,

    /// No position could be determined.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}
