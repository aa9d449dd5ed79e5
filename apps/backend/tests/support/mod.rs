//! Shared helpers for integration tests.
//!
//! Every test builds its own `AppState` backed by a fresh in-memory SQLite
//! database (migrated on connect), so tests are fully isolated and need no
//! external services.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend_test_support::problem_details::assert_problem_details_from_parts;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.as_bytes())
}

/// Build an AppState on a fresh in-memory SQLite database.
pub async fn test_state() -> AppState {
    backend_test_support::logging::init();

    build_state()
        .with_db(DbProfile::SqliteMem)
        .with_security(test_security())
        .build()
        .await
        .expect("failed to build test state")
}

/// Initialize the full application service with production routes and the
/// production middleware stack.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

pub async fn post_json<S, B>(app: &S, uri: &str, body: serde_json::Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

/// Register an account through the public API and return its id.
pub async fn register_user<S, B>(app: &S, name: &str, email: &str, password: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED, "registration failed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("registration response has an id")
}

/// Log in through the public API and return the bearer token.
pub async fn login_user<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK, "login failed");

    let body: serde_json::Value = test::read_body_json(resp).await;
    body["token"]
        .as_str()
        .expect("login response has a token")
        .to_string()
}

/// Drive a request through the service and collect (status, headers, body).
///
/// Middleware failures come back as a service-level `Err`; the real server
/// renders those through `ResponseError`, so this helper does the same
/// conversion instead of panicking the way `call_service` would.
pub async fn call_collect<S, B>(
    app: &S,
    req: Request,
) -> (
    StatusCode,
    actix_web::http::header::HeaderMap,
    actix_web::web::Bytes,
)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = test::read_body(resp).await;
            (status, headers, body)
        }
        Err(err) => {
            let resp = err.as_response_error().error_response();
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = actix_web::body::to_bytes(resp.into_body())
                .await
                .unwrap_or_default();
            (status, headers, body)
        }
    }
}

/// Assert a Problem Details error response: status, code, trace-id parity,
/// and optionally a substring of the detail.
pub async fn assert_problem<S, B>(
    app: &S,
    req: Request,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, headers, body) = call_collect(app, req).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}
