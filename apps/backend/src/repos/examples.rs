//! Example repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::examples_sea as examples_adapter;
use crate::adapters::examples_sea::{ExampleCreate, ExampleUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Example domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub id: i64,
    pub example1: String,
    pub example2: String,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Example>, DomainError> {
    let rows = examples_adapter::find_all(conn).await.map_err(map_db_err)?;
    Ok(rows.into_iter().map(Example::from).collect())
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Example, DomainError> {
    let example = examples_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    example
        .map(Example::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Example, "Example not found"))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExampleCreate,
) -> Result<Example, DomainError> {
    let example = examples_adapter::create(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Example::from(example))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExampleUpdate,
) -> Result<Example, DomainError> {
    // Surface a domain-level not-found instead of RecordNotUpdated.
    require_by_id(conn, dto.id).await?;

    let example = examples_adapter::update(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Example::from(example))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    let rows = examples_adapter::delete(conn, id).await.map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Example,
            "Example not found",
        ));
    }
    Ok(())
}

impl From<crate::entities::examples::Model> for Example {
    fn from(model: crate::entities::examples::Model) -> Self {
        Self {
            id: model.id,
            example1: model.example1,
            example2: model.example2,
        }
    }
}
