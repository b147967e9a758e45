//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// External sign-in screen users are sent to on authentication failure.
    pub auth_service_url: String,
    /// Base URL of the Bookify backend API.
    pub api_base_url: String,
    /// Geocoding endpoint used to resolve free-text locations.
    pub geocode_api_url: String,
    pub google_api_key: String,
}
