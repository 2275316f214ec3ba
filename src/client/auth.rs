/**
 * Auth Session Controller
 *
 * Client-side orchestration of login, registration and logout, exposed to
 * the UI together with the current-identity observation state.
 *
 * # Demo bypass
 *
 * When the backend is unavailable (availability-class failure only, never
 * a validation rejection) and the caller presented exactly the reserved
 * demo credentials, login silently succeeds with a fabricated local
 * identity and a locally generated token. This keeps the dashboard usable
 * with no backend at all. Registration degrades the same way, gated by
 * `allow_offline_registration` since a fabricated signup persists nothing.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use crate::client::api::ApiClient;
use crate::client::error::ApiError;
use crate::client::fallback::{demo_user, DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN};
use crate::client::session::Session;
use crate::shared::api::RegisterRequest;
use crate::shared::models::UserProfile;

/// Observable authentication state for the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    /// False until the persisted session has been consulted, so the UI can
    /// tell "still loading" apart from "confirmed logged out"
    pub initialized: bool,
    /// True while a login or registration is in flight
    pub loading: bool,
    /// Mirror of the API client's offline flag
    pub offline: bool,
}

/// Client-side auth orchestrator.
///
/// Cheaply cloneable; clones share state through the underlying client.
#[derive(Debug, Clone)]
pub struct AuthController {
    client: ApiClient,
    initialized: Arc<AtomicBool>,
    loading: Arc<AtomicBool>,
    allow_offline_registration: bool,
}

impl AuthController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            initialized: Arc::new(AtomicBool::new(false)),
            loading: Arc::new(AtomicBool::new(false)),
            allow_offline_registration: true,
        }
    }

    /// Disable (or re-enable) the offline registration fabrication while
    /// keeping the demo login bypass.
    pub fn with_offline_registration(mut self, allow: bool) -> Self {
        self.allow_offline_registration = allow;
        self
    }

    /// Load the persisted session. Call once at startup; afterwards
    /// `is_initialized` is true and `current_user` reflects the stored
    /// session (or its absence).
    pub fn initialize(&self) {
        let _ = self.client.session().get();
        self.initialized.store(true, Ordering::Relaxed);
    }

    /// Revalidate the persisted session against the backend at startup.
    ///
    /// A confirmed token refreshes the cached profile. A rejected token
    /// ends the session (the access layer has already cleared it). An
    /// unreachable backend keeps the cached identity, so offline startup
    /// still lands on the dashboard. Marks initialization complete either
    /// way.
    pub async fn refresh(&self) -> Option<UserProfile> {
        let session = self.client.session().get();
        self.initialized.store(true, Ordering::Relaxed);
        let session = session?;

        match self.client.me().await {
            Ok(user) => Some(user),
            Err(e) if e.is_availability() => {
                tracing::warn!("Backend unavailable ({}); keeping cached session", e);
                Some(session.user)
            }
            Err(e) => {
                tracing::warn!("Persisted session rejected: {}", e);
                // 401 has already cleared the store; any other rejection
                // ends the session the same way
                self.client.session().clear();
                None
            }
        }
    }

    /// Log in with email and password.
    ///
    /// On backend unavailability with exactly the reserved demo
    /// credentials, fabricates the demo identity locally. Both the email
    /// and the password must match; a wrong demo password against an
    /// unreachable backend still fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        let result = self.login_inner(email, password).await;
        self.loading.store(false, Ordering::Relaxed);
        result
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        match self.client.login(email, password).await {
            Ok(response) => Ok(response.user),
            Err(e) if e.is_availability() && email == DEMO_EMAIL && password == DEMO_PASSWORD => {
                tracing::warn!("Backend unavailable ({}); using demo login bypass", e);
                let user = demo_user();
                self.client.session().set(Session {
                    token: DEMO_TOKEN.to_string(),
                    user: user.clone(),
                });
                Ok(user)
            }
            Err(e) => Err(e),
        }
    }

    /// Register a new account.
    ///
    /// On backend unavailability (and only then; validation rejections
    /// always propagate) a local identity is fabricated from the submitted
    /// form fields, unless offline registration is disabled.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        let result = self.register_inner(request).await;
        self.loading.store(false, Ordering::Relaxed);
        result
    }

    async fn register_inner(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        match self.client.register(request).await {
            Ok(response) => Ok(response.user),
            Err(e) if e.is_availability() && self.allow_offline_registration => {
                tracing::warn!(
                    "Backend unavailable ({}); fabricating local registration for {}",
                    e,
                    request.email
                );
                let suffix = Uuid::new_v4();
                let user = UserProfile {
                    id: format!("demo-user-{suffix}"),
                    name: request.name.clone(),
                    email: request.email.clone(),
                    organization: request.organization.clone(),
                    role: "user".to_string(),
                    phone: request.phone.clone(),
                };
                self.client.session().set(Session {
                    token: format!("demo-token-{suffix}"),
                    user: user.clone(),
                });
                Ok(user)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the session unconditionally. Never fails.
    pub fn logout(&self) {
        self.client.logout();
    }

    /// The identity currently attached to the session, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.client.session().user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Relaxed)
    }

    /// Snapshot of the observable state for UI rendering.
    pub fn snapshot(&self) -> AuthState {
        let user = self.current_user();
        AuthState {
            is_authenticated: user.is_some(),
            user,
            initialized: self.is_initialized(),
            loading: self.loading.load(Ordering::Relaxed),
            offline: self.client.is_offline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::session::SessionStore;

    fn controller() -> AuthController {
        let client = ApiClient::new(ClientConfig::default(), SessionStore::in_memory());
        AuthController::new(client)
    }

    #[test]
    fn test_starts_uninitialized_and_logged_out() {
        let auth = controller();
        let state = auth.snapshot();
        assert!(!state.initialized);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_initialize_flips_flag() {
        let auth = controller();
        auth.initialize();
        assert!(auth.is_initialized());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_logout_is_infallible_when_logged_out() {
        let auth = controller();
        auth.logout();
        auth.logout();
        assert!(!auth.is_authenticated());
    }
}
