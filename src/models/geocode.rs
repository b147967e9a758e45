//! Wire model for the geocoding response.

use serde::Deserialize;

use crate::domain::geo::Coordinates;

/// Top-level geocoding payload. Only the result list matters here; an
/// empty list is the "location not found" signal.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: GeoPoint,
}

#[derive(Debug, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoPoint> for Coordinates {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.lat,
            longitude: point.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_first_result_coordinates() {
        let payload = r#"{
            "results": [
                {
                    "formatted_address": "Paris, France",
                    "geometry": {
                        "location": { "lat": 48.8566, "lng": 2.3522 },
                        "location_type": "APPROXIMATE"
                    }
                }
            ],
            "status": "OK"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(payload).unwrap();
        let coordinates: Coordinates = response
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry.location.into())
            .unwrap();

        assert_eq!(coordinates.latitude, 48.8566);
        assert_eq!(coordinates.longitude, 2.3522);
    }

    #[test]
    fn empty_and_missing_results_decode_to_no_match() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [], "status": "ZERO_RESULTS"}"#).unwrap();
        assert!(response.results.is_empty());

        let response: GeocodeResponse = serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
