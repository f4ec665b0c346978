//! Handler for `POST /api/returns` -- the rental close state transition.
//!
//! A rental is `Open` until `date_returned` is set, then permanently
//! `Closed`. The close computes the fee from elapsed time and the daily
//! rate frozen in the rental's movie snapshot, then restores the live
//! movie's stock; see [`RentalRepo::close`] for the transactional
//! compare-and-swap.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use reelstock_core::error::CoreError;
use reelstock_core::rental::{rental_days, rental_fee};
use reelstock_db::models::rental::{Rental, RentalRequest};
use reelstock_db::repositories::RentalRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/returns
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

    // 1. The newest rental for the pair, open or closed.
    let rental = RentalRepo::find_latest_by_pair(&state.pool, customer_id, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::RentalNotFound {
            customer_id,
            movie_id,
        }))?;

    // 2. Closed rentals are immutable.
    if rental.is_closed() {
        return Err(AppError::Core(CoreError::AlreadyReturned));
    }

    // 3. Fee from elapsed time and the snapshot rate. An instant return
    //    bills zero days and a zero fee.
    let date_returned = Utc::now();
    let days = rental_days(rental.date_out, date_returned);
    let fee = rental_fee(days, rental.movie.daily_rental_rate);

    // 4. Close and restock atomically. A `None` here means a concurrent
    //    return won the compare-and-swap after our read.
    let closed = RentalRepo::close(&state.pool, rental.id, rental.movie.id, date_returned, fee)
        .await?
        .ok_or(AppError::Core(CoreError::AlreadyReturned))?;

    Ok(Json(closed))
}
