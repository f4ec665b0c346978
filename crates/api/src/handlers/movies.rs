//! Handlers for the `/movies` resource.
//!
//! Create and update resolve the body's `genreId` to a live genre and
//! freeze a `{id, name}` snapshot into the movie row; an unresolvable
//! reference is a 400, not a 404.

use axum::extract::{Path, State};
use axum::Json;
use reelstock_core::error::CoreError;
use reelstock_core::types::DbId;
use reelstock_db::models::movie::{CreateMovie, GenreSnapshot, Movie};
use reelstock_db::repositories::{GenreRepo, MovieRepo};
use validator::Validate;

use crate::error::{parse_id, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = parse_id("Movie", &id)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// POST /api/movies
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateMovie>,
) -> AppResult<Json<Movie>> {
    input.validate()?;
    let genre = resolve_genre(&state, &input).await?;
    let movie = MovieRepo::create(
        &state.pool,
        &input.title,
        &genre,
        input.number_in_stock,
        input.daily_rental_rate,
    )
    .await?;
    Ok(Json(movie))
}

/// PUT /api/movies/{id}
///
/// Full replacement, including a fresh genre snapshot.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<CreateMovie>,
) -> AppResult<Json<Movie>> {
    input.validate()?;
    let id = parse_id("Movie", &id)?;
    let genre = resolve_genre(&state, &input).await?;
    let movie = MovieRepo::update(
        &state.pool,
        id,
        &input.title,
        &genre,
        input.number_in_stock,
        input.daily_rental_rate,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// DELETE /api/movies/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = parse_id("Movie", &id)?;
    let movie = MovieRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// Resolve the body's `genreId` to a frozen snapshot.
async fn resolve_genre(state: &AppState, input: &CreateMovie) -> AppResult<GenreSnapshot> {
    let genre_id: DbId = input.genre_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("genreId is required".into()))
    })?;
    let genre = GenreRepo::find_by_id(&state.pool, genre_id)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidReference {
            entity: "Genre",
            id: genre_id,
        }))?;
    Ok(GenreSnapshot {
        id: genre.id,
        name: genre.name,
    })
}
