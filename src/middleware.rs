//! Middleware turning authentication failures into a sign-in redirect.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};

/// Where unauthenticated browsers are sent.
pub const SIGNIN_PATH: &str = "/auth/signin";

/// Replaces any `401 Unauthorized` outcome, whether a handler response
/// or an extractor error, with a `303 See Other` to the sign-in screen.
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let (http_req, payload) = req.into_parts();
        let request = http_req.clone();
        let fut = self
            .service
            .call(ServiceRequest::from_parts(http_req, payload));

        Box::pin(async move {
            let request = match fut.await {
                Ok(res) if res.status() != StatusCode::UNAUTHORIZED => {
                    return Ok(res.map_into_left_body());
                }
                Ok(res) => res.into_parts().0,
                Err(err)
                    if err.as_response_error().status_code() == StatusCode::UNAUTHORIZED =>
                {
                    request
                }
                Err(err) => return Err(err),
            };

            let response = HttpResponse::SeeOther()
                .insert_header((header::LOCATION, SIGNIN_PATH))
                .finish()
                .map_into_right_body();

            Ok(ServiceResponse::new(request, response))
        })
    }
}
