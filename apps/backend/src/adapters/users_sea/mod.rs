//! SeaORM adapter for the users table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        role: Set(dto.role),
        is_active: Set(dto.is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

pub async fn update_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    name: &str,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: Set(user_id),
        name: Set(name.to_string()),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    user_active.update(conn).await
}

pub async fn update_password_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    password_hash: &str,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: Set(user_id),
        password_hash: Set(password_hash.to_string()),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    user_active.update(conn).await
}

pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::delete_by_id(user_id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Page through users ordered by id; returns the page plus the total row
/// count so callers can report pagination metadata.
pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<users::Model>, u64), sea_orm::DbErr> {
    let total = users::Entity::find().count(conn).await?;

    let rows = users::Entity::find()
        .order_by_asc(users::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await?;

    Ok((rows, total))
}
