//! Example resource operations. Thin by design: each call forwards to the
//! repo and lets not-found surface as a 404.

use sea_orm::ConnectionTrait;

use crate::adapters::examples_sea::{ExampleCreate, ExampleUpdate};
use crate::error::AppError;
use crate::repos::examples;
use crate::repos::examples::Example;

pub async fn list(conn: &(impl ConnectionTrait + Send + Sync)) -> Result<Vec<Example>, AppError> {
    Ok(examples::find_all(conn).await?)
}

pub async fn get(id: i64, conn: &(impl ConnectionTrait + Send + Sync)) -> Result<Example, AppError> {
    Ok(examples::require_by_id(conn, id).await?)
}

pub async fn create(
    example1: String,
    example2: String,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<Example, AppError> {
    Ok(examples::create(conn, ExampleCreate { example1, example2 }).await?)
}

pub async fn update(
    id: i64,
    example1: String,
    example2: String,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<Example, AppError> {
    Ok(examples::update(
        conn,
        ExampleUpdate {
            id,
            example1,
            example2,
        },
    )
    .await?)
}

pub async fn delete(id: i64, conn: &(impl ConnectionTrait + Send + Sync)) -> Result<(), AppError> {
    examples::delete(conn, id).await?;
    Ok(())
}
