//! Authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, verifies it,
//! and stores the validated claims in request extensions. Wrapped around
//! protected scopes only; a failure short-circuits the request with 401
//! before the downstream handler runs. The token value itself is never
//! logged.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        let token = match extract_bearer_from_header(auth_header.as_ref()) {
            Ok(token) => token,
            Err(err) => return Box::pin(async move { Err(err.into()) }),
        };

        let app_state = match app_state {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store claims in request extensions BEFORE calling the service
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            // Propagate the verifier's kind (expired/invalid/malformed);
            // every kind still renders as 401.
            Err(e) => Box::pin(async move { Err(e.into()) }),
        }
    }
}

/// Parse the exact `Bearer <token>` form: two whitespace-separated parts,
/// the first literally `Bearer`. Anything else (absent header, wrong
/// scheme, extra segments, empty token) is the same 401.
fn extract_bearer_from_header(
    header_value: Option<&header::HeaderValue>,
) -> Result<String, AppError> {
    let auth_value = header_value.ok_or_else(AppError::unauthorized_missing_bearer)?;

    let auth_str = auth_value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::unauthorized_missing_bearer());
    }

    Ok(parts[1].to_string())
}
