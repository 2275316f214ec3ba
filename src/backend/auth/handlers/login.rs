/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Record the login time
 * 4. Issue a JWT and set the auth cookie
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message, so
 *   accounts cannot be enumerated
 * - bcrypt verification is constant-time
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use bcrypt::verify;

use crate::backend::auth::handlers::auth_cookie;
use crate::backend::auth::sessions::issue_token;
use crate::backend::auth::users::{get_user_by_email, touch_last_login};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - datastore not configured
/// * `500 Internal Server Error` - query, verification or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let pool = state.require_pool()?.clone();
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown email: {}", request.email);
            BackendError::unauthorized("Invalid email or password")
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", request.email);
        return Err(BackendError::unauthorized("Invalid email or password"));
    }

    touch_last_login(&pool, user.id).await?;

    let token = issue_token(&state.jwt, user.id, &user.email)?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    let headers = AppendHeaders([(SET_COOKIE, auth_cookie(&token, state.secure_cookies))]);
    let body = Json(AuthResponse {
        user: user.profile(),
        token,
    });

    Ok((headers, body))
}
