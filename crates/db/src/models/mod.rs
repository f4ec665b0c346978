//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for the request bodies that write it
//!
//! Wire format is camelCase to match the API contract; column names stay
//! snake_case.

pub mod customer;
pub mod genre;
pub mod movie;
pub mod rental;
pub mod user;
