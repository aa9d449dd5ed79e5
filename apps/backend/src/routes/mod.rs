use actix_web::web;

pub mod auth;
pub mod examples;
pub mod health;
pub mod users;

use crate::middleware::jwt_extract::JwtExtract;
use crate::middleware::require_role::RequireRole;

/// Configure application routes. Used by `main.rs` and by tests so both
/// exercise the same scopes and middleware wiring.
///
/// Note on `wrap` ordering: the middleware registered last runs first, so
/// the admin scope authenticates (`JwtExtract`) before it authorizes
/// (`RequireRole`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    cfg.configure(health::configure_routes);

    // Public auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Authenticated user routes: /api/users/**
    cfg.service(
        web::scope("/api/users")
            .wrap(JwtExtract)
            .configure(users::configure_user_routes),
    );

    // Admin-only routes: /api/admin/**
    cfg.service(
        web::scope("/api/admin")
            .wrap(RequireRole::admin())
            .wrap(JwtExtract)
            .configure(users::configure_admin_routes),
    );

    // Public example CRUD: /api/examples/**
    cfg.service(web::scope("/api/examples").configure(examples::configure_routes));
}
