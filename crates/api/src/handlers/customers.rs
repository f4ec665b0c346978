//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::Json;
use reelstock_core::error::CoreError;
use reelstock_db::models::customer::{CreateCustomer, Customer};
use reelstock_db::repositories::CustomerRepo;
use validator::Validate;

use crate::error::{parse_id, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let id = parse_id("Customer", &id)?;
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// POST /api/customers
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCustomer>,
) -> AppResult<Json<Customer>> {
    input.validate()?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok(Json(customer))
}

/// PUT /api/customers/{id}
///
/// Full replacement with the create-shaped body.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<Json<Customer>> {
    input.validate()?;
    let id = parse_id("Customer", &id)?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id} (admin only)
///
/// Responds with the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let id = parse_id("Customer", &id)?;
    let customer = CustomerRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}
