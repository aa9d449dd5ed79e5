//! Idempotent bootstrap of the admin account.
//!
//! Creates an active user with the admin role if no account exists for
//! SEED_ADMIN_EMAIL. The password comes from SEED_ADMIN_PASSWORD and is
//! never printed or logged.

use backend::adapters::users_sea::UserCreate;
use backend::auth::claims::ROLE_ADMIN;
use backend::auth::password::hash_password;
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::repos::users;

#[tokio::main]
async fn main() {
    tracing_subscriber_init();

    let email =
        std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let name = std::env::var("SEED_ADMIN_NAME")
        .unwrap_or_else(|_| "System Administrator".to_string());
    let password = match std::env::var("SEED_ADMIN_PASSWORD") {
        Ok(p) if !p.trim().is_empty() => p,
        _ => {
            eprintln!("❌ SEED_ADMIN_PASSWORD must be set and non-empty");
            std::process::exit(1);
        }
    };

    let state = match build_state().with_db(DbProfile::Postgres).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };
    let db = match state.require_db() {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    match users::find_by_email(db, &email).await {
        Ok(Some(_)) => {
            tracing::info!("Admin user already exists, nothing to do");
        }
        Ok(None) => {
            let password_hash = match hash_password(&password) {
                Ok(hash) => hash,
                Err(e) => {
                    eprintln!("❌ Failed to hash password: {e}");
                    std::process::exit(1);
                }
            };

            let result = users::create_user(
                db,
                UserCreate {
                    name,
                    email,
                    password_hash,
                    role: ROLE_ADMIN.to_string(),
                    is_active: true,
                },
            )
            .await;

            match result {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Admin user created");
                    println!("✅ Admin user created. Change the password after first login.");
                }
                Err(e) => {
                    eprintln!("❌ Failed to create admin user: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("❌ Failed to look up admin user: {e}");
            std::process::exit(1);
        }
    }
}

fn tracing_subscriber_init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("backend=info,seed_admin=info,sqlx=warn")
        .init();
}
