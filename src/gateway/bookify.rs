//! Client for the Bookify backend: hotel search and profile sync.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};

use crate::domain::hotel::HotelSummary;
use crate::domain::profile::{ImageUpload, UpdateProfile, UserProfile};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{HotelSearchApi, NearbyQuery, ProfileApi};
use crate::models::hotel::RemoteHotel;
use crate::models::profile::RemoteProfile;

/// Reqwest-backed client for the Bookify API.
///
/// The auth token travels verbatim in the `Authorization` header; the
/// backend neither expects nor accepts a scheme prefix.
#[derive(Clone)]
pub struct BookifyBackend {
    http: reqwest::Client,
    base_url: String,
}

impl BookifyBackend {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl HotelSearchApi for BookifyBackend {
    async fn nearby(&self, query: NearbyQuery) -> GatewayResult<Vec<HotelSummary>> {
        let response = self
            .http
            .get(self.url("/api/hotels/nearby"))
            .query(&[
                ("lat", query.coordinates.latitude),
                ("lng", query.coordinates.longitude),
                // Kilometers end to end; the backend takes the value as is.
                ("radius", query.radius_km.get()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let hotels: Vec<RemoteHotel> = response.json().await?;
        Ok(hotels.into_iter().map(Into::into).collect())
    }
}

impl ProfileApi for BookifyBackend {
    async fn fetch_profile(&self, token: &str) -> GatewayResult<UserProfile> {
        let response = self
            .http
            .get(self.url("/api/auth/profile"))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }

        let profile: RemoteProfile = response.error_for_status()?.json().await?;
        Ok(profile.into())
    }

    async fn update_profile(
        &self,
        token: &str,
        profile_id: &str,
        updates: &UpdateProfile,
        image: Option<ImageUpload>,
    ) -> GatewayResult<()> {
        let mut form = Form::new()
            .text("username", updates.username.clone())
            .text("email", updates.email.clone())
            .text("phone", updates.phone.clone())
            .text("address", updates.address.clone())
            .text(
                "idType",
                updates.id_type.map(|t| t.as_str()).unwrap_or_default(),
            )
            .text("idNumber", updates.id_number.clone());

        if let Some(image) = image {
            let mut part = Part::bytes(image.bytes);
            if let Some(file_name) = image.file_name {
                part = part.file_name(file_name);
            }
            if let Some(content_type) = image.content_type {
                part = part.mime_str(&content_type)?;
            }
            form = form.part("img", part);
        }

        let response = self
            .http
            .put(self.url(&format!("/api/users/{profile_id}")))
            .header(AUTHORIZATION, token)
            .multipart(form)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }

        response.error_for_status()?;
        Ok(())
    }
}
