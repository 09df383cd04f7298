//! Axum route handlers for signup and login.

use axum::{
    extract::{FromRef, State},
    Json,
};
use tracing::{info, warn};

use crate::auth::dto::{LoginRequest, SignupRequest, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::errors::{is_unique_violation, AppError};
use crate::models::user::UserRow;
use crate::state::AppState;

/// POST /api/auth/signup
///
/// Creates a user and returns a bearer token. A duplicate email surfaces as a
/// 400 with a fixed message and no token; the unique index on `users.email`
/// is the only uniqueness check.
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let password_hash = hash_password(&request.password).map_err(AppError::Internal)?;

    let user = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (full_name, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&request.full_name)
    .bind(&request.email)
    .bind(&password_hash)
    .bind(request.role.as_str())
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            warn!(email = %request.email, "signup with already-registered email");
            AppError::Validation("Email already exists".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, request.role).map_err(AppError::Internal)?;

    info!(user_id = %user.id, role = %request.role, "user signed up");
    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password collapse to the same 401 body so the
/// response does not reveal which check failed. The token role comes from the
/// stored row, never from the request.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(&request.email)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| {
            warn!(email = %request.email, "login with unknown email");
            AppError::InvalidCredentials
        })?;

    let ok = verify_password(&request.password, &user.password_hash)
        .map_err(AppError::Internal)?;
    if !ok {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let role = user
        .role
        .parse()
        .map_err(|e: String| AppError::Internal(anyhow::anyhow!(e)))?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, role).map_err(AppError::Internal)?;

    info!(user_id = %user.id, role = %role, "user logged in");
    Ok(Json(TokenResponse { token }))
}
