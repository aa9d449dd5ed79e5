use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::users::User;
use crate::services::users as users_service;
use crate::state::app_state::AppState;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PER_PAGE: u64 = 10;

/// Public view of a user record. The password hash never leaves the
/// service layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct UsersPage {
    pub users: Vec<UserResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

async fn get_profile(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let profile = users_service::get_profile(user.id, db).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(profile)))
}

async fn update_profile(
    user: CurrentUser,
    body: ValidatedJson<UpdateProfileRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let updated = users_service::update_profile(user.id, &body.name, db).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

async fn change_password(
    user: CurrentUser,
    body: ValidatedJson<ChangePasswordRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    users_service::change_password(user.id, &body.current_password, &body.new_password, db)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_users(
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);

    let (users, total) = users_service::list_users(page, per_page, db).await?;

    let response = UsersPage {
        users: users.into_iter().map(UserResponse::from).collect(),
        page,
        per_page,
        total,
    };
    Ok(HttpResponse::Ok().json(response))
}

async fn delete_user(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    users_service::delete_user(path.into_inner(), db).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Routes under /api/users (authenticated).
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(get_profile))
            .route(web::put().to(update_profile)),
    )
    .service(web::resource("/change-password").route(web::put().to(change_password)));
}

/// Routes under /api/admin (authenticated + admin role).
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users").route(web::get().to(list_users)))
        .service(web::resource("/users/{id}").route(web::delete().to(delete_user)));
}
