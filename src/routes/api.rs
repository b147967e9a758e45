use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::dto::api::NearbyHotelsResponse;
use crate::forms::search::SearchForm;
use crate::gateway::bookify::BookifyBackend;
use crate::gateway::geocode::GoogleGeocoder;
use crate::services::ServiceError;
use crate::services::search::search_hotels;

#[derive(Debug, Deserialize)]
struct ApiV1NearbyQueryParams {
    location: Option<String>,
    radius: Option<String>,
}

#[get("/v1/hotels/nearby")]
pub async fn api_v1_hotels_nearby(
    params: web::Query<ApiV1NearbyQueryParams>,
    geocoder: web::Data<GoogleGeocoder>,
    backend: web::Data<BookifyBackend>,
) -> impl Responder {
    let params = params.into_inner();
    let form = SearchForm {
        location: params.location.unwrap_or_default(),
        radius: params.radius.unwrap_or_default(),
    };

    match search_hotels(geocoder.get_ref(), backend.get_ref(), form).await {
        Ok(page) => HttpResponse::Ok().json(NearbyHotelsResponse::from(page)),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(ServiceError::LocationNotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "location not found" }))
        }
        Err(err) => {
            error!("Failed to search hotels: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
