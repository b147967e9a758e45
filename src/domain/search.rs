use serde::{Deserialize, Serialize};

use crate::domain::types::{LocationText, RadiusKm, TypeConstraintError};

/// Validated hotel-search request.
///
/// Created per user action and discarded once the request chain
/// completes. Construction is the validation: an empty location or a
/// non-positive radius never produces a query, so no network call is
/// made for invalid input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub location: LocationText,
    pub radius_km: RadiusKm,
}

impl SearchQuery {
    pub fn new<S: Into<String>>(location: S, radius_km: f64) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            location: LocationText::new(location)?,
            radius_km: RadiusKm::new(radius_km)?,
        })
    }
}
