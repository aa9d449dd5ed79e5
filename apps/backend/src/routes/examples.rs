//! CRUD handlers for the example resource. Pure storage glue: each handler
//! forwards to the service and lets missing rows surface as 404.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::examples::Example;
use crate::services::examples as examples_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub id: i64,
    pub example1: String,
    pub example2: String,
}

impl From<Example> for ExampleResponse {
    fn from(example: Example) -> Self {
        Self {
            id: example.id,
            example1: example.example1,
            example2: example.example2,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExampleRequest {
    pub example1: String,
    pub example2: String,
}

async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let examples = examples_service::list(db).await?;
    let response: Vec<ExampleResponse> = examples.into_iter().map(ExampleResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

async fn show(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let example = examples_service::get(path.into_inner(), db).await?;
    Ok(HttpResponse::Ok().json(ExampleResponse::from(example)))
}

async fn create(
    body: ValidatedJson<ExampleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let body = body.into_inner();
    let example = examples_service::create(body.example1, body.example2, db).await?;
    Ok(HttpResponse::Created().json(ExampleResponse::from(example)))
}

async fn update(
    path: web::Path<i64>,
    body: ValidatedJson<ExampleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let body = body.into_inner();
    let example =
        examples_service::update(path.into_inner(), body.example1, body.example2, db).await?;
    Ok(HttpResponse::Ok().json(ExampleResponse::from(example)))
}

async fn delete(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    examples_service::delete(path.into_inner(), db).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(index))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(show))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
