//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return raw `sea_orm::DbErr`; the repos layer converts through
//! `map_db_err` so services only ever see `DomainError`. Detail strings are
//! sanitized; driver messages can contain literal column values.

use tracing::error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::web::trace_ctx;

/// Detect a unique-violation on users.email for both backends we run on:
/// SQLite reports "UNIQUE constraint failed: users.email", Postgres reports
/// the constraint name ("users_email_key").
fn is_unique_email_violation(error_msg: &str) -> bool {
    error_msg.contains("UNIQUE constraint failed: users.email")
        || error_msg.contains("users_email_key")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        // Update of a row that no longer exists surfaces as RecordNotUpdated.
        sea_orm::DbErr::RecordNotUpdated => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            error!(trace_id = %trace_ctx::trace_id(), "database unavailable: {error_msg}");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ if is_unique_email_violation(&error_msg) => {
            DomainError::conflict(ConflictKind::UniqueEmail, "Email already registered")
        }
        _ => {
            error!(trace_id = %trace_ctx::trace_id(), "database error: {error_msg}");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database error")
        }
    }
}
