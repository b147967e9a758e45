use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::profile::IdType;
use crate::forms::profile::SaveProfileForm;
use crate::gateway::bookify::BookifyBackend;
use crate::models::auth::AuthToken;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::profile as profile_service;

#[get("/profile")]
pub async fn show_profile(
    token: AuthToken,
    backend: web::Data<BookifyBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "profile", &server_config.auth_service_url);

    match profile_service::load_profile(backend.get_ref(), &token).await {
        Ok(profile) => {
            context.insert("profile", &profile);
            context.insert("id_types", &IdType::ALL.map(IdType::as_str));
        }
        Err(ServiceError::Unauthorized) => {
            return HttpResponse::Unauthorized().finish();
        }
        Err(_) => {
            context.insert("error", "Failed to fetch profile");
        }
    }

    render_template(&tera, "profile/index.html", &context)
}

#[post("/profile/save")]
pub async fn save_profile(
    token: AuthToken,
    backend: web::Data<BookifyBackend>,
    MultipartForm(form): MultipartForm<SaveProfileForm>,
) -> impl Responder {
    let updates = match form.to_update() {
        Ok(updates) => updates,
        Err(err) => {
            log::error!("Failed to validate profile form: {err}");
            FlashMessage::error("Failed to update profile").send();
            return redirect("/profile");
        }
    };

    let image = match form.read_image() {
        Ok(image) => image,
        Err(err) => {
            log::error!("Failed to read profile image: {err}");
            FlashMessage::error("Failed to update profile").send();
            return redirect("/profile");
        }
    };

    match profile_service::save_profile(backend.get_ref(), &token, &form.id, &updates, image).await
    {
        Ok(()) => {
            FlashMessage::success("Profile updated successfully!").send();
        }
        Err(ServiceError::Unauthorized) => {
            return HttpResponse::Unauthorized().finish();
        }
        Err(err) => {
            log::error!("Failed to save profile: {err}");
            FlashMessage::error("Failed to update profile").send();
        }
    }

    redirect("/profile")
}
