//! Access to the remote APIs the portal is a front for.
//!
//! The traits are the seam between the service layer and the network:
//! services stay generic over them and tests substitute mocks.

use crate::domain::geo::Coordinates;
use crate::domain::hotel::HotelSummary;
use crate::domain::profile::{ImageUpload, UpdateProfile, UserProfile};
use crate::domain::types::RadiusKm;
use crate::gateway::errors::GatewayResult;

pub mod bookify;
pub mod errors;
pub mod geocode;

/// Parameters for a proximity search against the hotel backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub coordinates: Coordinates,
    pub radius_km: RadiusKm,
}

impl NearbyQuery {
    #[must_use]
    pub fn new(coordinates: Coordinates, radius_km: RadiusKm) -> Self {
        Self {
            coordinates,
            radius_km,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait GeocodeApi {
    /// Resolves free text to the first matching coordinates, or `None`
    /// when the geocoder has no match. One attempt, no retries.
    async fn resolve(&self, location: &str) -> GatewayResult<Option<Coordinates>>;
}

#[allow(async_fn_in_trait)]
pub trait HotelSearchApi {
    /// Returns the hotels near the given point, in backend order.
    async fn nearby(&self, query: NearbyQuery) -> GatewayResult<Vec<HotelSummary>>;
}

#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    /// Fetches the profile belonging to the token's user.
    async fn fetch_profile(&self, token: &str) -> GatewayResult<UserProfile>;

    /// Overwrites the profile with the submitted fields, attaching the
    /// image when one was uploaded.
    async fn update_profile(
        &self,
        token: &str,
        profile_id: &str,
        updates: &UpdateProfile,
        image: Option<ImageUpload>,
    ) -> GatewayResult<()>;
}
