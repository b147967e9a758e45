//! Wire model for the backend's profile object.

use serde::Deserialize;

use crate::domain::profile::UserProfile;

/// Profile object as returned by `/api/auth/profile`. The backend may
/// omit fields it has never stored, and uses an empty string for an
/// unset id type.
#[derive(Debug, Deserialize)]
pub struct RemoteProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "idType")]
    pub id_type: Option<String>,
    #[serde(default, rename = "idNumber")]
    pub id_number: String,
    #[serde(default)]
    pub img: Option<String>,
}

impl From<RemoteProfile> for UserProfile {
    fn from(profile: RemoteProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            id_type: profile.id_type.as_deref().and_then(|s| s.parse().ok()),
            id_number: profile.id_number,
            image_url: profile.img.filter(|url| !url.is_empty()),
        }
    }
}
