//! Waypoint — a named stop on a trip's itinerary.

use serde::{Deserialize, Serialize};

/// A named geographic stop. Trips keep waypoints in visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    #[must_use]
    pub fn create(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}
