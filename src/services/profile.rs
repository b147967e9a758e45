use crate::domain::profile::{ImageUpload, UpdateProfile, UserProfile};
use crate::gateway::ProfileApi;
use crate::gateway::errors::GatewayError;
use crate::models::auth::AuthToken;
use crate::services::{ServiceError, ServiceResult};

/// Fetches the signed-in user's profile.
pub async fn load_profile<P>(api: &P, token: &AuthToken) -> ServiceResult<UserProfile>
where
    P: ProfileApi,
{
    match api.fetch_profile(token.as_str()).await {
        Ok(profile) => Ok(profile),
        Err(GatewayError::Unauthorized) => Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to fetch profile: {err}");
            Err(ServiceError::ProfileFetch)
        }
    }
}

/// Saves the whole profile form, attaching the image when one was
/// uploaded. There are no partial-save semantics; the backend overwrites
/// every editable field.
pub async fn save_profile<P>(
    api: &P,
    token: &AuthToken,
    profile_id: &str,
    updates: &UpdateProfile,
    image: Option<ImageUpload>,
) -> ServiceResult<()>
where
    P: ProfileApi,
{
    let profile_id = profile_id.trim();
    if profile_id.is_empty() {
        log::error!("Profile save submitted without a profile id");
        return Err(ServiceError::Form("Missing profile id".to_string()));
    }

    match api
        .update_profile(token.as_str(), profile_id, updates, image)
        .await
    {
        Ok(()) => Ok(()),
        Err(GatewayError::Unauthorized) => Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to update profile {profile_id}: {err}");
            Err(ServiceError::ProfileUpdate)
        }
    }
}
