//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::Json;
use reelstock_core::error::CoreError;
use reelstock_db::models::genre::{CreateGenre, Genre};
use reelstock_db::repositories::GenreRepo;
use validator::Validate;

use crate::error::{parse_id, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /api/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Genre>> {
    let id = parse_id("Genre", &id)?;
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// POST /api/genres
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateGenre>,
) -> AppResult<Json<Genre>> {
    input.validate()?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    Ok(Json(genre))
}

/// PUT /api/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<CreateGenre>,
) -> AppResult<Json<Genre>> {
    input.validate()?;
    let id = parse_id("Genre", &id)?;
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// DELETE /api/genres/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<Genre>> {
    let id = parse_id("Genre", &id)?;
    let genre = GenreRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}
