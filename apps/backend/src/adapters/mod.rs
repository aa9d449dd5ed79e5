//! SeaORM adapters. Each module owns the queries for one table and returns
//! `sea_orm::DbErr`; the repos layer maps those into `DomainError`.

pub mod examples_sea;
pub mod users_sea;
