//! Authorization middleware.
//!
//! Gates a route group behind a required role claim. Parameterized by the
//! role string so the same middleware serves any future role, not just
//! "admin". Must be wired to run after `JwtExtract`: absent claims mean
//! authentication never happened (401), a present-but-different role means
//! the caller is authenticated but not allowed (403).

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::{Claims, ROLE_ADMIN};
use crate::error::AppError;

pub struct RequireRole {
    required_role: String,
}

impl RequireRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            required_role: role.into(),
        }
    }

    /// Shorthand for the one role the current API actually gates on.
    pub fn admin() -> Self {
        Self::new(ROLE_ADMIN)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service,
            required_role: self.required_role.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: S,
    required_role: String,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        // Borrow of extensions must end before the request is moved on.
        let role_matches = req
            .extensions()
            .get::<Claims>()
            .map(|claims| claims.role == self.required_role);

        match role_matches {
            None => Box::pin(async { Err(AppError::unauthorized().into()) }),
            Some(false) => Box::pin(async { Err(AppError::forbidden().into()) }),
            Some(true) => Box::pin(self.service.call(req)),
        }
    }
}
