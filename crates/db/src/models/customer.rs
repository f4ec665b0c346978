//! Customer entity model and DTOs.

use reelstock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a customer. PUT uses the same shape: updates
/// are full replacements, not patches.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    #[validate(length(min = 5, max = 50, message = "name must be 5-50 characters"))]
    pub name: String,
    #[validate(length(min = 5, max = 50, message = "phone must be 5-50 characters"))]
    pub phone: String,
    #[serde(default)]
    pub is_gold: bool,
}
