use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::forms::search::SearchForm;
use crate::gateway::bookify::BookifyBackend;
use crate::gateway::geocode::GoogleGeocoder;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::search::search_hotels;
use crate::services::ServiceError;

#[derive(Debug, Deserialize)]
struct IndexQueryParams {
    location: Option<String>,
    radius: Option<String>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    geocoder: web::Data<GoogleGeocoder>,
    backend: web::Data<BookifyBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "index", &server_config.auth_service_url);

    let params = params.into_inner();
    if params.location.is_none() && params.radius.is_none() {
        return render_template(&tera, "main/index.html", &context);
    }

    let form = SearchForm {
        location: params.location.unwrap_or_default(),
        radius: params.radius.unwrap_or_default(),
    };
    context.insert("location", &form.location);
    context.insert("radius", &form.radius);

    match search_hotels(geocoder.get_ref(), backend.get_ref(), form).await {
        Ok(page) => {
            context.insert("searched", &true);
            context.insert("coordinates", &page.coordinates);
            context.insert("hotels", &page.hotels);
        }
        Err(err) => {
            let message = search_error_message(&err);
            context.insert("error", &message);
        }
    }

    render_template(&tera, "main/index.html", &context)
}

/// One inline message per failure condition, matching the search screen.
fn search_error_message(err: &ServiceError) -> String {
    match err {
        ServiceError::Form(message) => message.clone(),
        ServiceError::LocationNotFound => "Location not found. Please try again.".to_string(),
        ServiceError::Geocode => "Failed to fetch location".to_string(),
        _ => "Failed to fetch hotels".to_string(),
    }
}
