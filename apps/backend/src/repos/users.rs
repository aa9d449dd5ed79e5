//! User repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::adapters::users_sea::UserCreate;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

/// Like [`find_by_id`] but missing rows are an error, for call sites where
/// the user must exist.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(User::from(user))
}

pub async fn update_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    name: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::update_name(conn, user_id, name)
        .await
        .map_err(map_db_err)?;
    Ok(User::from(user))
}

pub async fn update_password_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    password_hash: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::update_password_hash(conn, user_id, password_hash)
        .await
        .map_err(map_db_err)?;
    Ok(User::from(user))
}

pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), DomainError> {
    let rows = users_adapter::delete_user(conn, user_id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(NotFoundKind::User, "User not found"));
    }
    Ok(())
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<User>, u64), DomainError> {
    let (rows, total) = users_adapter::list_users(conn, offset, limit)
        .await
        .map_err(map_db_err)?;
    Ok((rows.into_iter().map(User::from).collect(), total))
}

// Conversion between the SeaORM model and the domain model

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
