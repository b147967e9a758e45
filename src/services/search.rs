use validator::Validate;

use crate::domain::search::SearchQuery;
use crate::domain::types::TypeConstraintError;
use crate::dto::search::SearchPageData;
use crate::forms::search::SearchForm;
use crate::gateway::errors::GatewayError;
use crate::gateway::{GeocodeApi, HotelSearchApi, NearbyQuery};
use crate::services::{ServiceError, ServiceResult};

/// Runs the proximity-search workflow: validate the form, resolve the
/// location, then query the hotel backend.
///
/// Invalid input never reaches the network. A geocoder with no match
/// ends the workflow before the hotel endpoint is called.
pub async fn search_hotels<G, H>(
    geocoder: &G,
    hotels: &H,
    form: SearchForm,
) -> ServiceResult<SearchPageData>
where
    G: GeocodeApi,
    H: HotelSearchApi,
{
    if let Err(errors) = form.validate() {
        log::error!("Failed to validate search form: {errors}");
        return Err(ServiceError::Form(
            search_form_message(errors.field_errors().contains_key("location")).to_string(),
        ));
    }

    let query = match SearchQuery::try_from(&form) {
        Ok(query) => query,
        Err(err) => {
            log::error!("Failed to build search query: {err}");
            let missing_location = matches!(err, TypeConstraintError::EmptyString);
            return Err(ServiceError::Form(
                search_form_message(missing_location).to_string(),
            ));
        }
    };

    let coordinates = match geocoder.resolve(query.location.as_str()).await {
        Ok(Some(coordinates)) => coordinates,
        Ok(None) => return Err(ServiceError::LocationNotFound),
        Err(err) => {
            log::error!("Failed to geocode {:?}: {err}", query.location.as_str());
            return Err(ServiceError::Geocode);
        }
    };

    let found = hotels
        .nearby(NearbyQuery::new(coordinates, query.radius_km))
        .await
        .map_err(|err: GatewayError| {
            log::error!("Failed to fetch nearby hotels: {err}");
            ServiceError::HotelSearch
        })?;

    Ok(SearchPageData {
        coordinates,
        hotels: found,
    })
}

fn search_form_message(missing_location: bool) -> &'static str {
    if missing_location {
        "Please enter a location"
    } else {
        "Please enter a valid distance"
    }
}
