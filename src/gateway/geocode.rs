//! Geocoding client resolving free-text locations to coordinates.

use crate::domain::geo::Coordinates;
use crate::gateway::GeocodeApi;
use crate::gateway::errors::GatewayResult;
use crate::models::geocode::GeocodeResponse;

/// Client for the Google Geocoding API.
#[derive(Clone)]
pub struct GoogleGeocoder {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(http: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }
}

impl GeocodeApi for GoogleGeocoder {
    async fn resolve(&self, location: &str) -> GatewayResult<Option<Coordinates>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("address", location), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let payload: GeocodeResponse = response.json().await?;

        Ok(payload
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location.into()))
    }
}
