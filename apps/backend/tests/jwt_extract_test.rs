mod support;

use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use actix_web::test;
use backend::mint_access_token;
use backend::SecurityConfig;
use backend::ROLE_USER;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;
use support::{
    assert_problem, create_test_app, login_user, register_user, test_security, test_state,
};

fn profile_req() -> test::TestRequest {
    test::TestRequest::get().uri("/api/users/profile")
}

#[actix_web::test]
async fn missing_header_is_rejected() {
    let app = create_test_app(test_state().await).await;

    assert_problem(
        &app,
        profile_req().to_request(),
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        Some("Bearer"),
    )
    .await;
}

#[actix_web::test]
async fn empty_header_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = profile_req()
        .insert_header(("Authorization", ""))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        None,
    )
    .await;
}

#[actix_web::test]
async fn wrong_scheme_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = profile_req()
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        None,
    )
    .await;
}

#[actix_web::test]
async fn scheme_without_token_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = profile_req()
        .insert_header(("Authorization", "Bearer"))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        None,
    )
    .await;
}

#[actix_web::test]
async fn extra_segments_are_rejected() {
    let app = create_test_app(test_state().await).await;

    let req = profile_req()
        .insert_header(("Authorization", "Bearer a b"))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        None,
    )
    .await;
}

#[actix_web::test]
async fn garbage_token_is_malformed() {
    let app = create_test_app(test_state().await).await;

    let req = profile_req()
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MALFORMED_JWT",
        None,
    )
    .await;
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let app = create_test_app(test_state().await).await;

    // Same secret as the app, but minted an hour ago with a 10-second
    // lifetime: signature fine, expiry in the past.
    let security = test_security().with_token_ttl_secs(10);
    let past = SystemTime::now() - Duration::from_secs(60 * 60);
    let token = mint_access_token(1, "expired@example.test", ROLE_USER, past, &security).unwrap();

    let req = profile_req()
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_EXPIRED_JWT",
        Some("expired"),
    )
    .await;
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_rejected() {
    let app = create_test_app(test_state().await).await;

    let other = SecurityConfig::new("a-completely-different-secret".as_bytes());
    let token = mint_access_token(
        1,
        "intruder@example.test",
        ROLE_USER,
        SystemTime::now(),
        &other,
    )
    .unwrap();

    let req = profile_req()
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_JWT",
        None,
    )
    .await;
}

#[actix_web::test]
async fn valid_token_reaches_the_handler_with_identity() {
    let app = create_test_app(test_state().await).await;

    let email = unique_email("dave");
    let user_id = register_user(&app, "Dave", &email, "secret1").await;
    let token = login_user(&app, &email, "secret1").await;

    let req = profile_req()
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(user_id));
    assert_eq!(body["email"], json!(email));
    assert_eq!(body["role"], json!("user"));
}
