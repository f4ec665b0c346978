//! Handlers for the `/rentals` resource: listing and checkout.
//!
//! Checkout freezes customer and movie snapshots into the new rental and
//! decrements the movie's stock; both writes share one transaction in
//! [`RentalRepo::create`].

use axum::extract::{Path, State};
use axum::Json;
use reelstock_core::error::CoreError;
use reelstock_db::models::rental::{Rental, RentalRequest};
use reelstock_db::repositories::{CustomerRepo, MovieRepo, RentalRepo};
use validator::Validate;

use crate::error::{parse_id, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/rentals
///
/// Most recently checked out first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Rental>>> {
    let rentals = RentalRepo::list(&state.pool).await?;
    Ok(Json(rentals))
}

/// GET /api/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Rental>> {
    let id = parse_id("Rental", &id)?;
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental",
            id,
        }))?;
    Ok(Json(rental))
}

/// POST /api/rentals
///
/// Check a movie out to a customer.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<RentalRequest>,
) -> AppResult<Json<Rental>> {
    input.validate()?;
    let (customer_id, movie_id) = input.ids().ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "customerId and movieId are required".into(),
        ))
    })?;

    // 1. Both references must resolve to live records.
    let customer = CustomerRepo::find_by_id(&state.pool, customer_id)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidReference {
            entity: "Customer",
            id: customer_id,
        }))?;

    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidReference {
            entity: "Movie",
            id: movie_id,
        }))?;

    // 2. The movie must have a copy on the shelf.
    if movie.number_in_stock == 0 {
        return Err(AppError::Core(CoreError::OutOfStock { movie_id }));
    }

    // 3. Insert the rental and take the copy, atomically. A `None` here
    //    means a concurrent checkout took the last copy after our read.
    let rental = RentalRepo::create(&state.pool, &customer, &movie)
        .await?
        .ok_or(AppError::Core(CoreError::OutOfStock { movie_id }))?;

    Ok(Json(rental))
}
