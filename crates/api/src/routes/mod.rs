//! Route definitions.
//!
//! Route hierarchy (token = any valid identity token, admin = token with
//! the admin flag):
//!
//! ```text
//! /health                    service + database health (root level)
//!
//! /api/customers             GET list | POST create (token)
//! /api/customers/{id}        GET | PUT (token) | DELETE (admin)
//! /api/genres                GET list | POST create (token)
//! /api/genres/{id}           GET | PUT (token) | DELETE (admin)
//! /api/movies                GET list | POST create (token)
//! /api/movies/{id}           GET | PUT (token) | DELETE (admin)
//! /api/rentals               GET list | POST checkout (token)
//! /api/rentals/{id}          GET
//! /api/returns               POST close rental (token)
//! /api/auth                  POST login (public)
//! /api/users                 POST register (public)
//! /api/users/me              GET current user (token)
//! ```

pub mod auth;
pub mod customers;
pub mod genres;
pub mod health;
pub mod movies;
pub mod rentals;
pub mod returns;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/genres", genres::router())
        .nest("/movies", movies::router())
        .nest("/rentals", rentals::router())
        .nest("/returns", returns::router())
        .nest("/auth", auth::router())
        .nest("/users", users::router())
}
