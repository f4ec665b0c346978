//! HTTP-level integration tests for the `/movies` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, mint_token, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Create a genre via the API and return its id.
async fn seed_genre(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        common::post_json_auth(app, "/api/genres", token, serde_json::json!({"name": name})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_freezes_genre_snapshot(pool: PgPool) {
    let token = mint_token(1, false);
    let genre_id = seed_genre(&pool, &token, "science fiction").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/movies",
        &token,
        serde_json::json!({
            "title": "Blade Runner",
            "genreId": genre_id,
            "numberInStock": 10,
            "dailyRentalRate": 2
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let movie = body_json(response).await;
    assert_eq!(movie["title"], "Blade Runner");
    assert_eq!(movie["genre"]["id"], genre_id);
    assert_eq!(movie["genre"]["name"], "science fiction");
    assert_eq!(movie["numberInStock"], 10);
    assert_eq!(movie["dailyRentalRate"], 2);

    // Renaming the genre later must not touch the movie's frozen snapshot.
    let movie_id = movie["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/genres/{genre_id}"),
        &token,
        serde_json::json!({"name": "space opera"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/movies/{movie_id}")).await).await;
    assert_eq!(json["genre"]["name"], "science fiction");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_with_unknown_genre_is_rejected(pool: PgPool) {
    let token = mint_token(1, false);
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/movies",
        &token,
        serde_json::json!({
            "title": "Blade Runner",
            "genreId": 999999,
            "numberInStock": 10,
            "dailyRentalRate": 2
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_without_genre_id_is_rejected(pool: PgPool) {
    let token = mint_token(1, false);
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/movies",
        &token,
        serde_json::json!({
            "title": "Blade Runner",
            "numberInStock": 10,
            "dailyRentalRate": 2
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Stock and rate must stay within 0-255.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_movie_stock_and_rate_bounds(pool: PgPool) {
    let token = mint_token(1, false);
    let genre_id = seed_genre(&pool, &token, "science fiction").await;

    for (stock, rate, expected) in [
        (0, 0, StatusCode::OK),
        (255, 255, StatusCode::OK),
        (256, 2, StatusCode::BAD_REQUEST),
        (10, 256, StatusCode::BAD_REQUEST),
        (-1, 2, StatusCode::BAD_REQUEST),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/movies",
            &token,
            serde_json::json!({
                "title": "Blade Runner",
                "genreId": genre_id,
                "numberInStock": stock,
                "dailyRentalRate": rate
            }),
        )
        .await;
        assert_eq!(response.status(), expected, "stock={stock} rate={rate}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_movie_replaces_genre_snapshot(pool: PgPool) {
    let token = mint_token(1, false);
    let first_genre = seed_genre(&pool, &token, "science fiction").await;
    let second_genre = seed_genre(&pool, &token, "film noir classics").await;

    let app = common::build_test_app(pool.clone());
    let movie = body_json(
        post_json_auth(
            app,
            "/api/movies",
            &token,
            serde_json::json!({
                "title": "Blade Runner",
                "genreId": first_genre,
                "numberInStock": 10,
                "dailyRentalRate": 2
            }),
        )
        .await,
    )
    .await;
    let movie_id = movie["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/movies/{movie_id}"),
        &token,
        serde_json::json!({
            "title": "Blade Runner Final Cut",
            "genreId": second_genre,
            "numberInStock": 7,
            "dailyRentalRate": 3
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Blade Runner Final Cut");
    assert_eq!(json["genre"]["id"], second_genre);
    assert_eq!(json["genre"]["name"], "film noir classics");
    assert_eq!(json["numberInStock"], 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_movies_sorted_by_title(pool: PgPool) {
    let token = mint_token(1, false);
    let genre_id = seed_genre(&pool, &token, "science fiction").await;

    for title in ["Zardoz Forever", "Alien Covenant"] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/movies",
            &token,
            serde_json::json!({
                "title": title,
                "genreId": genre_id,
                "numberInStock": 5,
                "dailyRentalRate": 1
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/movies").await).await;
    assert_eq!(json[0]["title"], "Alien Covenant");
    assert_eq!(json[1]["title"], "Zardoz Forever");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_movie_admin_only(pool: PgPool) {
    let token = mint_token(1, false);
    let admin_token = mint_token(2, true);
    let genre_id = seed_genre(&pool, &token, "science fiction").await;

    let app = common::build_test_app(pool.clone());
    let movie = body_json(
        post_json_auth(
            app,
            "/api/movies",
            &token,
            serde_json::json!({
                "title": "Blade Runner",
                "genreId": genre_id,
                "numberInStock": 10,
                "dailyRentalRate": 2
            }),
        )
        .await,
    )
    .await;
    let movie_id = movie["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/movies/{movie_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/movies/{movie_id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
