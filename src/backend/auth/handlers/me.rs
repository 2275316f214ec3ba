/**
 * Current User Handler
 *
 * GET /api/auth/me - returns the profile for the verified token, letting
 * a client refresh its cached user without a full login.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::models::UserProfile;

/// Current-user handler
///
/// # Errors
///
/// * `401 Unauthorized` - the token's user no longer exists
/// * `503 Service Unavailable` - datastore not configured
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserProfile>, BackendError> {
    let pool = state.require_pool()?.clone();

    let record = get_user_by_id(&pool, user.user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for deleted user: {}", user.user_id);
        BackendError::unauthorized("Unauthorized")
    })?;

    Ok(Json(record.profile()))
}
