/**
 * Application State Management
 *
 * `AppState` is the central state container: the optional database pool,
 * the JWT keys, and the cookie policy. `FromRef` implementations let
 * handlers extract just the part they need.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted; `JwtKeys` is immutable after
 * construction and shared behind an `Arc`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::JwtKeys;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` when `DATABASE_URL` is unset or unreachable; handlers
    /// answer 503 in that case.
    pub db_pool: Option<PgPool>,

    /// Token signing/verification keys
    pub jwt: Arc<JwtKeys>,

    /// Whether auth cookies carry the `Secure` attribute
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db_pool: Option<PgPool>, jwt: JwtKeys, secure_cookies: bool) -> Self {
        Self {
            db_pool,
            jwt: Arc::new(jwt),
            secure_cookies,
        }
    }

    /// The pool, or the 503 error when the datastore is not configured.
    pub fn require_pool(&self) -> Result<&PgPool, crate::backend::error::BackendError> {
        self.db_pool
            .as_ref()
            .ok_or(crate::backend::error::BackendError::Unavailable)
    }
}

/// Extract the optional database pool directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Extract the JWT keys directly from `AppState`.
impl FromRef<AppState> for Arc<JwtKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
