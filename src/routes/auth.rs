use actix_web::{Responder, get, web};

use crate::models::config::ServerConfig;
use crate::routes::redirect;

/// Hands unauthenticated users over to the external sign-in screen.
///
/// The auth service lives on the shared cookie domain and writes the
/// session token this portal reads.
#[get("/auth/signin")]
pub async fn signin(server_config: web::Data<ServerConfig>) -> impl Responder {
    redirect(&server_config.auth_service_url)
}
