use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::gateway::bookify::BookifyBackend;
use crate::gateway::geocode::GoogleGeocoder;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::routes::api::api_v1_hotels_nearby;
use crate::routes::auth::signin;
use crate::routes::main::show_index;
use crate::routes::profile::{save_profile, show_profile};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One connection pool shared by both upstream clients.
    let http = reqwest::Client::new();
    let geocoder = GoogleGeocoder::new(
        http.clone(),
        server_config.geocode_api_url.clone(),
        server_config.google_api_key.clone(),
    );
    let backend = BookifyBackend::new(http, server_config.api_base_url.clone());

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(signin)
            .service(web::scope("/api").service(api_v1_hotels_nearby))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_profile)
                    .service(save_profile),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(geocoder.clone()))
            .app_data(web::Data::new(backend.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
