//! Rental entity model and DTOs.

use reelstock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Customer snapshot frozen into a rental at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerSnapshot {
    #[sqlx(rename = "customer_id")]
    pub id: DbId,
    #[sqlx(rename = "customer_name")]
    pub name: String,
    #[sqlx(rename = "customer_phone")]
    pub phone: String,
}

/// Movie snapshot frozen into a rental at creation.
///
/// The daily rate captured here is what the fee is computed from, not the
/// live movie row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSnapshot {
    #[sqlx(rename = "movie_id")]
    pub id: DbId,
    #[sqlx(rename = "movie_title")]
    pub title: String,
    #[sqlx(rename = "movie_daily_rental_rate")]
    pub daily_rental_rate: i16,
}

/// Full rental row from the `rentals` table.
///
/// A rental is open while `date_returned` is NULL and closed once it is
/// set; the close is one-way. `rental_fee` is set together with
/// `date_returned`, exactly once.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: DbId,
    pub date_out: Timestamp,
    pub date_returned: Option<Timestamp>,
    pub rental_fee: Option<i64>,
    #[sqlx(flatten)]
    pub customer: CustomerSnapshot,
    #[sqlx(flatten)]
    pub movie: MovieSnapshot,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Rental {
    /// Whether the rental has been returned.
    pub fn is_closed(&self) -> bool {
        self.date_returned.is_some()
    }
}

/// Request body shared by `POST /api/rentals` and `POST /api/returns`.
///
/// Both ids are `Option` so a missing field surfaces as a validation
/// failure (400) instead of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    #[validate(required(message = "customerId is required"))]
    pub customer_id: Option<DbId>,
    #[validate(required(message = "movieId is required"))]
    pub movie_id: Option<DbId>,
}

impl RentalRequest {
    /// Both ids as a pair; `None` if either is absent. Present whenever
    /// `validate()` has succeeded.
    pub fn ids(&self) -> Option<(DbId, DbId)> {
        Some((self.customer_id?, self.movie_id?))
    }
}
