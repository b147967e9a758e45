//! Data shaped for the search results screen.

use serde::Serialize;

use crate::domain::geo::Coordinates;
use crate::domain::hotel::HotelSummary;

/// Result payload of a completed proximity search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchPageData {
    /// Point the free-text location resolved to.
    pub coordinates: Coordinates,
    /// Hotels in backend order, possibly empty.
    pub hotels: Vec<HotelSummary>,
}
