use serde::{Deserialize, Serialize};

/// Geographic point resolved from a free-text location.
///
/// Derived from the geocoding call and passed to the hotel search; never
/// persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
