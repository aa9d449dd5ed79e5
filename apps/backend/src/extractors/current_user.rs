use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Identity of the authenticated caller, read from the claims the
/// authentication middleware stored in request extensions. No storage
/// access happens here; the claims were already validated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        ready(match claims {
            Some(claims) => Ok(CurrentUser {
                id: claims.sub,
                email: claims.email,
                role: claims.role,
            }),
            // Route was wired without the authentication middleware, or the
            // middleware rejected and this extractor should never have run.
            None => Err(AppError::unauthorized()),
        })
    }
}
