//! Workflow functions generic over the gateway traits.

use thiserror::Error;

pub mod profile;
pub mod search;

/// Errors surfaced by the service layer.
///
/// Upstream failures collapse into one variant per workflow; the cause
/// is logged where it happens, not shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("location not found")]
    LocationNotFound,

    #[error("{0}")]
    Form(String),

    #[error("location lookup failed")]
    Geocode,

    #[error("hotel search failed")]
    HotelSearch,

    #[error("profile fetch failed")]
    ProfileFetch,

    #[error("profile update failed")]
    ProfileUpdate,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
