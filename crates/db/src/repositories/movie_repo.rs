//! Repository for the `movies` table.
//!
//! Stock mutations (decrement on rent, increment on return) live in
//! [`crate::repositories::rental_repo`] so they stay inside the rental
//! workflow's transaction; this repository only handles direct movie CRUD.

use reelstock_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{GenreSnapshot, Movie};

const COLUMNS: &str = "id, title, genre_id, genre_name, number_in_stock, \
                       daily_rental_rate, created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie with its genre snapshot, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        genre: &GenreSnapshot,
        number_in_stock: i16,
        daily_rental_rate: i16,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre_id, genre_name, number_in_stock, daily_rental_rate)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(title)
            .bind(genre.id)
            .bind(&genre.name)
            .bind(number_in_stock)
            .bind(daily_rental_rate)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Replace a movie, including a fresh genre snapshot. Returns `None` if
    /// no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        genre: &GenreSnapshot,
        number_in_stock: i16,
        daily_rental_rate: i16,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                genre_id = $3,
                genre_name = $4,
                number_in_stock = $5,
                daily_rental_rate = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(title)
            .bind(genre.id)
            .bind(&genre.name)
            .bind(number_in_stock)
            .bind(daily_rental_rate)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("DELETE FROM movies WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
