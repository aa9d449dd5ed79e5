//! SeaORM adapter for the examples table.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::examples;

pub mod dto;

pub use dto::{ExampleCreate, ExampleUpdate};

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<examples::Model>, sea_orm::DbErr> {
    examples::Entity::find()
        .order_by_asc(examples::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<examples::Model>, sea_orm::DbErr> {
    examples::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExampleCreate,
) -> Result<examples::Model, sea_orm::DbErr> {
    let example_active = examples::ActiveModel {
        id: NotSet,
        example1: Set(dto.example1),
        example2: Set(dto.example2),
    };

    example_active.insert(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExampleUpdate,
) -> Result<examples::Model, sea_orm::DbErr> {
    let example_active = examples::ActiveModel {
        id: Set(dto.id),
        example1: Set(dto.example1),
        example2: Set(dto.example2),
    };

    example_active.update(conn).await
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = examples::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
