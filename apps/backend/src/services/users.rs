use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::users_sea::UserCreate;
use crate::auth::claims::ROLE_USER;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users;
use crate::repos::users::User;
use crate::state::security_config::SecurityConfig;

/// Passwords shorter than this are rejected at registration and on change.
const MIN_PASSWORD_LEN: usize = 6;

fn validate_email(email: &str) -> Result<(), AppError> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::invalid(
            "INVALID_EMAIL",
            "A valid email address is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::invalid(
            "INVALID_PASSWORD",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid(
            "INVALID_NAME",
            "Name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Create a new account with the default "user" role.
///
/// The email is checked up front for a friendlier conflict message; the
/// unique index still backstops concurrent registrations, and that path
/// maps to the same conflict error.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<User, AppError> {
    let name = name.trim();
    let email = email.trim();

    validate_name(name)?;
    validate_email(email)?;
    validate_password(password)?;

    if users::find_by_email(conn, email).await?.is_some() {
        return Err(AppError::conflict(
            "UNIQUE_EMAIL",
            "Email already registered".to_string(),
        ));
    }

    let password_hash = hash_password(password)?;

    let user = users::create_user(
        conn,
        UserCreate {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role: ROLE_USER.to_string(),
            is_active: true,
        },
    )
    .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "User registered");

    Ok(user)
}

/// Verify credentials and mint an access token from the current user record.
///
/// Unknown email and wrong password produce the same `INVALID_CREDENTIALS`
/// rejection so the endpoint is not an account-probing oracle; the reason
/// stays visible in the security log.
pub async fn login(
    email: &str,
    password: &str,
    security: &SecurityConfig,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<(String, User), AppError> {
    let user = match users::find_by_email(conn, email).await? {
        Some(user) => user,
        None => {
            security::login_failed("unknown_email", Some(email));
            return Err(AppError::invalid_credentials());
        }
    };

    if !user.is_active {
        security::login_failed("account_disabled", Some(email));
        return Err(AppError::account_disabled());
    }

    if !verify_password(password, &user.password_hash) {
        security::login_failed("wrong_password", Some(email));
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(
        user.id,
        &user.email,
        &user.role,
        SystemTime::now(),
        security,
    )?;

    debug!(user_id = user.id, "Login succeeded");

    Ok((token, user))
}

pub async fn get_profile(user_id: i64, conn: &(impl ConnectionTrait + Send + Sync)) -> Result<User, AppError> {
    Ok(users::require_by_id(conn, user_id).await?)
}

pub async fn update_profile(
    user_id: i64,
    name: &str,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<User, AppError> {
    validate_name(name)?;
    users::require_by_id(conn, user_id).await?;

    let user = users::update_name(conn, user_id, name.trim()).await?;
    Ok(user)
}

/// Replace the stored hash after re-verifying the current password.
pub async fn change_password(
    user_id: i64,
    current_password: &str,
    new_password: &str,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<(), AppError> {
    validate_password(new_password)?;

    let user = users::require_by_id(conn, user_id).await?;

    if !verify_password(current_password, &user.password_hash) {
        security::login_failed("wrong_current_password", Some(&user.email));
        return Err(AppError::invalid_credentials());
    }

    let password_hash = hash_password(new_password)?;
    users::update_password_hash(conn, user_id, &password_hash).await?;

    info!(user_id = user.id, "Password changed");

    Ok(())
}

/// Page through all users. Page numbers are 1-based; out-of-range values
/// are clamped rather than rejected.
pub async fn list_users(
    page: u64,
    per_page: u64,
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<(Vec<User>, u64), AppError> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let offset = (page - 1) * per_page;

    let (users, total) = users::list_users(conn, offset, per_page).await?;
    Ok((users, total))
}

pub async fn delete_user(user_id: i64, conn: &(impl ConnectionTrait + Send + Sync)) -> Result<(), AppError> {
    users::delete_user(conn, user_id).await?;
    info!(user_id, "User deleted");
    Ok(())
}
