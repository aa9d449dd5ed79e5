mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::adapters::users_sea::UserCreate;
use backend::repos::users;
use backend::{hash_password, ROLE_ADMIN, ROLE_USER};
use backend_test_support::unique_helpers::{unique_email, unique_str};
use serde_json::json;
use support::{assert_problem, create_test_app, login_user, test_state};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Seed users straight through the repo layer. One shared hash keeps the
/// test from paying for Argon2 once per row.
async fn seed_users(
    db: &sea_orm::DatabaseConnection,
    shared_hash: &str,
    count: usize,
    role: &str,
    is_active: bool,
) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let user = users::create_user(
            db,
            UserCreate {
                name: unique_str("seeded"),
                email: unique_email("seeded"),
                password_hash: shared_hash.to_string(),
                role: role.to_string(),
                is_active,
            },
        )
        .await
        .expect("failed to seed user");
        ids.push(user.id);
    }
    ids
}

#[actix_web::test]
async fn list_users_pages_through_the_table() {
    let state = test_state().await;
    let db = state.db.clone().unwrap();

    let hash = hash_password("admin123").unwrap();
    let admin_email = unique_email("admin");
    users::create_user(
        &db,
        UserCreate {
            name: "Admin".to_string(),
            email: admin_email.clone(),
            password_hash: hash.clone(),
            role: ROLE_ADMIN.to_string(),
            is_active: true,
        },
    )
    .await
    .unwrap();
    seed_users(&db, &hash, 14, ROLE_USER, true).await;

    let app = create_test_app(state).await;
    let token = login_user(&app, &admin_email, "admin123").await;

    // 15 rows total: page 1 holds 10, page 2 holds the remaining 5.
    let req = test::TestRequest::get()
        .uri("/api/admin/users?page=1&per_page=10")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page1: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(page1["total"], json!(15));
    assert_eq!(page1["users"].as_array().unwrap().len(), 10);

    let req = test::TestRequest::get()
        .uri("/api/admin/users?page=2&per_page=10")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let page2: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(page2["users"].as_array().unwrap().len(), 5);
    assert_eq!(page2["page"], json!(2));

    // No overlap between pages.
    let ids = |page: &serde_json::Value| -> Vec<i64> {
        page["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_i64().unwrap())
            .collect()
    };
    for id in ids(&page2) {
        assert!(!ids(&page1).contains(&id));
    }

    // The listing never exposes credential material.
    for user in page1["users"].as_array().unwrap() {
        assert!(user.get("password_hash").is_none());
    }
}

#[actix_web::test]
async fn out_of_range_paging_is_clamped() {
    let state = test_state().await;
    let db = state.db.clone().unwrap();

    let hash = hash_password("admin123").unwrap();
    let admin_email = unique_email("admin");
    users::create_user(
        &db,
        UserCreate {
            name: "Admin".to_string(),
            email: admin_email.clone(),
            password_hash: hash,
            role: ROLE_ADMIN.to_string(),
            is_active: true,
        },
    )
    .await
    .unwrap();

    let app = create_test_app(state).await;
    let token = login_user(&app, &admin_email, "admin123").await;

    let req = test::TestRequest::get()
        .uri("/api/admin/users?page=0&per_page=0")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(page["page"], json!(1));
    assert_eq!(page["per_page"], json!(1));
    assert_eq!(page["users"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn delete_user_then_repeat_is_not_found() {
    let state = test_state().await;
    let db = state.db.clone().unwrap();

    let hash = hash_password("admin123").unwrap();
    let admin_email = unique_email("admin");
    users::create_user(
        &db,
        UserCreate {
            name: "Admin".to_string(),
            email: admin_email.clone(),
            password_hash: hash.clone(),
            role: ROLE_ADMIN.to_string(),
            is_active: true,
        },
    )
    .await
    .unwrap();
    let victim_ids = seed_users(&db, &hash, 1, ROLE_USER, true).await;
    let victim_id = victim_ids[0];

    let app = create_test_app(state).await;
    let token = login_user(&app, &admin_email, "admin123").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{victim_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{victim_id}"))
        .insert_header(bearer(&token))
        .to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "USER_NOT_FOUND", None).await;
}

#[actix_web::test]
async fn deleted_user_token_stays_valid_but_profile_is_gone() {
    // Stateless tokens cannot be revoked: deleting the account does not
    // invalidate an outstanding token, the lookup behind it just 404s.
    let state = test_state().await;
    let db = state.db.clone().unwrap();

    let hash = hash_password("secret1").unwrap();
    let ids = seed_users(&db, &hash, 1, ROLE_USER, true).await;
    let user_id = ids[0];

    let app = create_test_app(state).await;

    let user = users::find_by_id(&db, user_id).await.unwrap().unwrap();
    let token = login_user(&app, &user.email, "secret1").await;

    users::delete_user(&db, user_id).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/users/profile")
        .insert_header(bearer(&token))
        .to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "USER_NOT_FOUND", None).await;
}

#[actix_web::test]
async fn deactivated_account_cannot_log_in() {
    let state = test_state().await;
    let db = state.db.clone().unwrap();

    let hash = hash_password("secret1").unwrap();
    let ids = seed_users(&db, &hash, 1, ROLE_USER, false).await;
    let user = users::find_by_id(&db, ids[0]).await.unwrap().unwrap();

    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": user.email, "password": "secret1" }))
        .to_request();
    assert_problem(&app, req, StatusCode::FORBIDDEN, "ACCOUNT_DISABLED", None).await;
}
