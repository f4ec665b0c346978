//! Movie entity model and DTOs.

use reelstock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Genre snapshot embedded in a movie row.
///
/// Copied from the genre at movie create/update time; a later rename of the
/// genre does not change it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GenreSnapshot {
    #[sqlx(rename = "genre_id")]
    pub id: DbId,
    #[sqlx(rename = "genre_name")]
    pub name: String,
}

/// Full movie row from the `movies` table.
///
/// `number_in_stock` is mutated only by the rental workflow; everything
/// else only via movie update requests.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[sqlx(flatten)]
    pub genre: GenreSnapshot,
    pub number_in_stock: i16,
    pub daily_rental_rate: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or replacing a movie.
///
/// `genre_id` is `Option` so a missing field fails validation with a 400
/// rather than a deserialization rejection; handlers resolve it to a
/// [`GenreSnapshot`] before writing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[validate(length(min = 5, max = 50, message = "title must be 5-50 characters"))]
    pub title: String,
    #[validate(required(message = "genreId is required"))]
    pub genre_id: Option<DbId>,
    #[validate(range(min = 0, max = 255, message = "numberInStock must be 0-255"))]
    pub number_in_stock: i16,
    #[validate(range(min = 0, max = 255, message = "dailyRentalRate must be 0-255"))]
    pub daily_rental_rate: i16,
}
