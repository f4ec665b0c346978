//! Handler for `POST /api/auth` (login).

use axum::extract::State;
use axum::Json;
use reelstock_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "email must be valid"),
        length(min = 5, max = 255, message = "email must be 5-255 characters")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 255, message = "password must be 5-255 characters"))]
    pub password: String,
}

/// POST /api/auth
///
/// Authenticate with email + password. Responds with the bare identity
/// token string. Bad credentials are a 400, indistinguishable between
/// unknown email and wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<String>> {
    input.validate()?;

    // 1. Find the user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

    // 2. Verify the password against the stored Argon2id hash.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    // 3. Issue the identity token.
    let token = generate_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(token))
}
