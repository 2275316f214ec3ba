/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Reject duplicate emails
 * 3. Hash the password with bcrypt
 * 4. Create the user row
 * 5. Issue a JWT and set the auth cookie
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt `DEFAULT_COST` before storage
 * - The password hash never appears in a response
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::handlers::auth_cookie;
use crate::backend::auth::sessions::issue_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{AuthResponse, RegisterRequest};

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email/password, or the email is taken
/// * `503 Service Unavailable` - datastore not configured
/// * `500 Internal Server Error` - hashing, insert or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let pool = state.require_pool()?.clone();
    tracing::info!("Registration request for: {}", request.email);

    if request.name.trim().is_empty() {
        return Err(BackendError::validation("Name is required"));
    }
    if !request.email.contains('@') {
        return Err(BackendError::validation("Invalid email address"));
    }
    if request.password.len() < 8 {
        return Err(BackendError::validation(
            "Password must be at least 8 characters",
        ));
    }

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email taken: {}", request.email);
        return Err(BackendError::validation("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        request.name.trim(),
        &request.email,
        &password_hash,
        request.organization.as_deref(),
        request.phone.as_deref(),
    )
    .await?;

    let token = issue_token(&state.jwt, user.id, &user.email)?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    let headers = AppendHeaders([(SET_COOKIE, auth_cookie(&token, state.secure_cookies))]);
    let body = Json(AuthResponse {
        user: user.profile(),
        token,
    });

    Ok((headers, body))
}
