//! Repository for the `rentals` table and the paired stock writes.
//!
//! Renting and returning each pair a rental write with a movie stock write.
//! Both pairs run inside a single transaction so a failure of either write
//! leaves no inventory drift.

use reelstock_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::models::movie::Movie;
use crate::models::rental::Rental;

const COLUMNS: &str = "id, date_out, date_returned, rental_fee, \
                       customer_id, customer_name, customer_phone, \
                       movie_id, movie_title, movie_daily_rental_rate, \
                       created_at, updated_at";

/// Provides rental persistence plus the paired stock mutations.
pub struct RentalRepo;

impl RentalRepo {
    /// Create an open rental and decrement the movie's stock by one, in a
    /// single transaction.
    ///
    /// The decrement is guarded by `number_in_stock > 0`; returns `Ok(None)`
    /// without writing anything if the guard fails (a concurrent rental took
    /// the last copy between the caller's stock check and this write).
    ///
    /// The customer and movie snapshots are frozen here and never refreshed.
    pub async fn create(
        pool: &PgPool,
        customer: &Customer,
        movie: &Movie,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let decremented = sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock - 1
             WHERE id = $1 AND number_in_stock > 0",
        )
        .bind(movie.id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO rentals
                (customer_id, customer_name, customer_phone,
                 movie_id, movie_title, movie_daily_rental_rate)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.phone)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(movie.daily_rental_rate)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(rental))
    }

    /// Find a rental by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The most recent rental for a (customer, movie) pair, open or closed.
    ///
    /// Return processing acts on this row: a repeat-rental history for the
    /// pair always resolves to the newest record.
    pub async fn find_latest_by_pair(
        pool: &PgPool,
        customer_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals
             WHERE customer_id = $1 AND movie_id = $2
             ORDER BY date_out DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(customer_id)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// List all rentals, most recently checked out first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals ORDER BY date_out DESC");
        sqlx::query_as::<_, Rental>(&query).fetch_all(pool).await
    }

    /// Close an open rental and restore the movie's stock, in a single
    /// transaction.
    ///
    /// The close is a compare-and-swap on `date_returned IS NULL`: returns
    /// `Ok(None)` without writing anything if the rental is already closed
    /// (including losing a race against a concurrent return).
    ///
    /// The stock increment targets the live movie row by id and tolerates a
    /// movie deleted since checkout; the guard keeps it within the column's
    /// 0-255 check.
    pub async fn close(
        pool: &PgPool,
        rental_id: DbId,
        movie_id: DbId,
        date_returned: Timestamp,
        rental_fee: i64,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE rentals SET date_returned = $2, rental_fee = $3
             WHERE id = $1 AND date_returned IS NULL
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(rental_id)
            .bind(date_returned)
            .bind(rental_fee)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(rental) = rental else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock + 1
             WHERE id = $1 AND number_in_stock < 255",
        )
        .bind(movie_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(rental))
    }
}
