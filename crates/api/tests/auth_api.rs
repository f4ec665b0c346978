//! HTTP-level integration tests for registration, login, and `/users/me`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

/// Register a user via the API, returning the response.
async fn register(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/users",
        serde_json::json!({"name": name, "email": email, "password": password}),
    )
    .await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_user_and_token_header(pool: PgPool) {
    let response = register(&pool, "Alice Walker", "alice@example.com", "hunter22").await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = response
        .headers()
        .get("x-auth-token")
        .expect("response must carry x-auth-token")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!token.is_empty());

    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice Walker");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["isAdmin"], false);
    // The password must never be echoed, hashed or otherwise.
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());

    // The fresh token must authenticate /users/me.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["email"], "alice@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_is_rejected(pool: PgPool) {
    let response = register(&pool, "Alice Walker", "alice@example.com", "hunter22").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = register(&pool, "Alice Clone", "alice@example.com", "hunter23").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_email_is_rejected(pool: PgPool) {
    let response = register(&pool, "Alice Walker", "not-an-email", "hunter22").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password_is_rejected(pool: PgPool) {
    let response = register(&pool, "Alice Walker", "alice@example.com", "abcd").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_returns_token_string(pool: PgPool) {
    register(&pool, "Alice Walker", "alice@example.com", "hunter22").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth",
        serde_json::json!({"email": "alice@example.com", "password": "hunter22"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json.as_str().expect("login body is the bare token string");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Bad credentials are a 400, the same for unknown email and wrong
/// password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_bad_credentials(pool: PgPool) {
    register(&pool, "Alice Walker", "alice@example.com", "hunter22").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth",
        serde_json::json!({"email": "alice@example.com", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth",
        serde_json::json!({"email": "ghost@example.com", "password": "hunter22"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/users/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_rejects_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users/me", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An admin created through the repository logs in and passes admin-only
/// authorization.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_login_carries_admin_flag(pool: PgPool) {
    let (_user, _token) = common::create_test_user(&pool, "admin@example.com", true).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth",
        serde_json::json!({"email": "admin@example.com", "password": "test_password_123!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json.as_str().unwrap().to_string();

    // Token minted by login must satisfy an admin-only route (a delete of a
    // nonexistent id gets past authorization and 404s, not 403s).
    let app = common::build_test_app(pool);
    let response = common::delete_auth(app, "/api/genres/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
