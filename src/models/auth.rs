//! Auth token extraction from the shared cookie session.
//!
//! The token is minted and verified by the Bookify auth service; this
//! application only reads it from the session and forwards it verbatim
//! on authenticated API calls. A request without a usable token fails
//! extraction with 401, which `RedirectUnauthorized` turns into a
//! redirect to the sign-in screen.

use std::future::{Ready, ready};

use actix_session::SessionExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};

/// Session key under which the auth service stores the token.
pub const TOKEN_SESSION_KEY: &str = "token";

/// Opaque credential attached to authenticated backend calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for AuthToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        match session.get::<String>(TOKEN_SESSION_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => ready(Ok(AuthToken(token))),
            _ => ready(Err(ErrorUnauthorized("missing auth token"))),
        }
    }
}
