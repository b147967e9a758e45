//! DTOs exposed by the portal's JSON endpoints.

use serde::Serialize;

use crate::domain::hotel::HotelSummary;
use crate::dto::search::SearchPageData;

/// Response payload of `/api/v1/hotels/nearby`.
#[derive(Debug, Serialize)]
pub struct NearbyHotelsResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Number of hotels returned.
    pub total: usize,
    /// Hotels in backend order.
    pub hotels: Vec<HotelSummary>,
}

impl From<SearchPageData> for NearbyHotelsResponse {
    fn from(page: SearchPageData) -> Self {
        Self {
            latitude: page.coordinates.latitude,
            longitude: page.coordinates.longitude,
            total: page.hotels.len(),
            hotels: page.hotels,
        }
    }
}
