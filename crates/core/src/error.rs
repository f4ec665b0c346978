use crate::types::DbId;

/// Domain error taxonomy for the rental service.
///
/// Each variant maps to exactly one HTTP status in the API layer; see
/// `AppError` in `reelstock-api` for the mapping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// No rental exists for the given customer/movie pair.
    #[error("No rental found for customer {customer_id} and movie {movie_id}")]
    RentalNotFound { customer_id: DbId, movie_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced foreign id (genreId, customerId, movieId) did not resolve.
    #[error("Invalid {entity} reference: {id}")]
    InvalidReference { entity: &'static str, id: DbId },

    #[error("Movie {movie_id} is not in stock")]
    OutOfStock { movie_id: DbId },

    /// The rental is already closed; `date_returned` is set exactly once.
    #[error("Return was already processed")]
    AlreadyReturned,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
