//! Domain layer for the reelstock rental service.
//!
//! Holds the shared id/timestamp aliases, the domain error taxonomy, and
//! the rental-period fee calculation. Everything here is pure: no I/O, no
//! database types, no HTTP types.

pub mod error;
pub mod rental;
pub mod types;
