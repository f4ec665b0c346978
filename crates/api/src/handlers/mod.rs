//! Request handlers.
//!
//! Each submodule serves a single resource. Handlers validate the request
//! body at the boundary, delegate persistence to the repositories in
//! `reelstock_db`, and map failures via [`crate::error::AppError`]. The
//! rental workflow itself lives in `rentals` (checkout) and `returns`
//! (close + fee).

pub mod auth;
pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;
pub mod returns;
pub mod users;
