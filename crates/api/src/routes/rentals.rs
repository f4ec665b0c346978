//! Route definitions for the `/rentals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rentals;
use crate::state::AppState;

/// Routes mounted at `/rentals`.
///
/// ```text
/// GET  /      -> list
/// POST /      -> create (token)
/// GET  /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rentals::list).post(rentals::create))
        .route("/{id}", get(rentals::get_by_id))
}
