//! Handlers for the `/users` resource (registration, current user).

use axum::extract::State;
use axum::response::AppendHeaders;
use axum::Json;
use reelstock_core::error::CoreError;
use reelstock_db::models::user::{CreateUser, RegisterUser, UserResponse};
use reelstock_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/users
///
/// Register a new account. The fresh identity token rides along in an
/// `x-auth-token` response header so clients can authenticate immediately;
/// the body is the created user without the password hash.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(
    AppendHeaders<[(&'static str, String); 1]>,
    Json<UserResponse>,
)> {
    input.validate()?;

    // 1. Reject duplicate registrations up front. The uq_users_email
    //    constraint backstops a race slipping past this check.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("User already registered".into()));
    }

    // 2. Hash the password; the plaintext goes no further.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    // 3. Issue a token for the new account.
    let token = generate_token(user.id, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        AppendHeaders([("x-auth-token", token)]),
        Json(UserResponse::from(user)),
    ))
}

/// GET /api/users/me
///
/// The authenticated user's own record, sans password.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(Json(UserResponse::from(user)))
}
