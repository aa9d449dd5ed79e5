use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::users::UserResponse;
use crate::services::users as users_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Create a new account. The response carries the public user view only,
/// no token; the client logs in separately.
async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let user = users_service::register(&body.name, &body.email, &body.password, db).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Verify credentials and return a bearer token plus the user it was
/// minted for.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let (token, user) =
        users_service::login(&body.email, &body.password, &app_state.security, db).await?;

    let response = LoginResponse {
        token,
        user: UserResponse::from(user),
    };
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)));
}
