//! Route definition for the `/returns` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::returns;
use crate::state::AppState;

/// Routes mounted at `/returns`.
///
/// ```text
/// POST /  -> create (token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(returns::create))
}
