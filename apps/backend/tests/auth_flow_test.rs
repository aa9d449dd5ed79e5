mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::verify_access_token;
use backend::ROLE_USER;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;
use support::{
    assert_problem, create_test_app, login_user, post_json, register_user, test_security,
    test_state,
};

#[actix_web::test]
async fn register_then_login_yields_user_role_token() {
    let app = create_test_app(test_state().await).await;

    let email = unique_email("alice");
    let user_id = register_user(&app, "Alice", &email, "secret1").await;

    let token = login_user(&app, &email, "secret1").await;
    assert!(!token.is_empty());

    // The token's validated claims mirror the user record at login time.
    let claims = verify_access_token(&token, &test_security()).expect("token should verify");
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, ROLE_USER);
    assert!(claims.exp > claims.iat);
}

#[actix_web::test]
async fn register_returns_public_view_without_password() {
    let app = create_test_app(test_state().await).await;

    let email = unique_email("bob");
    let resp = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Bob", "email": email, "password": "secret1" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], json!(email));
    assert_eq!(body["role"], json!("user"));
    assert_eq!(body["is_active"], json!(true));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("token").is_none());
}

#[actix_web::test]
async fn duplicate_email_registration_conflicts() {
    let app = create_test_app(test_state().await).await;

    let email = unique_email("dup");
    register_user(&app, "First", &email, "secret1").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "name": "Second", "email": email, "password": "secret2" }))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::CONFLICT,
        "UNIQUE_EMAIL",
        Some("already registered"),
    )
    .await;
}

#[actix_web::test]
async fn short_password_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Shorty",
            "email": unique_email("short"),
            "password": "12345"
        }))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "INVALID_PASSWORD",
        Some("at least 6"),
    )
    .await;
}

#[actix_web::test]
async fn invalid_email_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Malformed",
            "email": "not-an-email",
            "password": "secret1"
        }))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "INVALID_EMAIL", None).await;
}

#[actix_web::test]
async fn malformed_request_body_is_a_validation_error() {
    let app = create_test_app(test_state().await).await;

    // Missing the password field entirely.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": unique_email("incomplete") }))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "VALIDATION", None).await;
}

#[actix_web::test]
async fn wrong_password_is_unauthorized_with_no_token() {
    let app = create_test_app(test_state().await).await;

    let email = unique_email("carol");
    register_user(&app, "Carol", &email, "secret1").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], json!("INVALID_CREDENTIALS"));
    assert!(body.get("token").is_none());
}

#[actix_web::test]
async fn unknown_email_login_matches_wrong_password_shape() {
    let app = create_test_app(test_state().await).await;

    // No account probing: an unknown email is indistinguishable from a
    // wrong password at the HTTP level.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": unique_email("ghost"), "password": "secret1" }))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        None,
    )
    .await;
}
