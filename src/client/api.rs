/**
 * API Access Layer
 *
 * Single choke point for all backend calls. Every request carries the
 * current auth state, and transient backend failure degrades to canned
 * data instead of surfacing to the UI.
 *
 * # Status interpretation (in priority order)
 *
 * - 401 → session store cleared, `AuthRequired`
 * - 5xx → `ServerError`
 * - 404 → `EndpointNotFound`
 * - 400/422 → `Validation` with the server message
 * - other non-2xx → `Api` with the server message or `HTTP <status>`
 * - no response at all → `NetworkError`
 *
 * # Fallback policy
 *
 * Resource operations resolve the availability kinds (`ServerError`,
 * `EndpointNotFound`, `NetworkError`) into fallback data: reads return the
 * canned snapshot, writes return a synthesized success echoing the input.
 * `AuthRequired`, `Api` and `Validation` always propagate, and the
 * login/register operations never substitute; the auth controller decides
 * what an unreachable backend means for them.
 *
 * Substitution flips the client's offline flag and records the observed
 * kind; the returned value is shaped exactly like a live response.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::client::config::ClientConfig;
use crate::client::error::ApiError;
use crate::client::fallback;
use crate::client::session::{Session, SessionStore};
use crate::shared::api::{
    AlertFilter, AuthResponse, CreateAlertRequest, CreateAoiRequest, CreateLakeRequest,
    CreateReportRequest, DeleteResponse, LoginRequest, RegisterRequest, UpdateAoiRequest,
};
use crate::shared::models::{Alert, Aoi, GlacialLake, Report, UserProfile};

/// Error body shape produced by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Result of the three parallel dashboard fetches.
///
/// Each slice fails or succeeds independently; one rejected fetch never
/// blocks the others. Availability failures have already been resolved
/// into fallback data by the time they land here, so an `Err` slice is a
/// genuine rejection (e.g. `AuthRequired`).
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub aois: Result<Vec<Aoi>, ApiError>,
    pub alerts: Result<Vec<Alert>, ApiError>,
    pub lakes: Result<Vec<GlacialLake>, ApiError>,
    /// True when any fetch hit an availability-class error
    pub offline: bool,
}

/// The authenticated API client.
///
/// Cheaply cloneable; clones share the session store and the offline
/// flag. Constructed explicitly and injected wherever backend access is
/// needed; there is no global instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionStore,
    offline: Arc<AtomicBool>,
    last_degraded: Arc<Mutex<Option<ApiError>>>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
            offline: Arc::new(AtomicBool::new(false)),
            last_degraded: Arc::new(Mutex::new(None)),
        }
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Whether any operation has degraded to fallback data since the flag
    /// was last cleared. Drives the UI's "demo/offline mode" banner.
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::Relaxed)
    }

    /// The error kind observed before the most recent fallback
    /// substitution, if any.
    pub fn last_degraded(&self) -> Option<ApiError> {
        self.last_degraded.lock().expect("degraded flag poisoned").clone()
    }

    /// Reset the offline signals. Called on manual retry.
    pub fn clear_offline(&self) {
        self.offline.store(false, Ordering::Relaxed);
        *self.last_degraded.lock().expect("degraded flag poisoned") = None;
    }

    /// Issue a request and interpret the response status.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = self.config.api_url(path);

        let mut builder = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("No response from {}: {}", url, e);
                return Err(ApiError::NetworkError);
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Invalid or expired token: drop the session as a side effect
            self.session.clear();
            return Err(ApiError::AuthRequired);
        }
        if status.is_server_error() {
            tracing::warn!("Server error {} for {}", status, path);
            return Err(ApiError::ServerError);
        }
        if status == StatusCode::NOT_FOUND {
            tracing::warn!("Endpoint {} not found", path);
            return Err(ApiError::EndpointNotFound);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ApiError::Validation(message)
                }
                _ => ApiError::Api(message),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Api(format!("invalid response body: {e}")))
    }

    /// Resolve availability-class errors into a fallback value, recording
    /// the observed kind and raising the offline flag first. Everything
    /// else propagates.
    fn degrade<T>(
        &self,
        result: Result<T, ApiError>,
        substitute: impl FnOnce() -> T,
    ) -> Result<T, ApiError> {
        match result {
            Err(e) if e.is_availability() => {
                tracing::warn!("Backend unavailable ({}); using fallback data", e);
                *self.last_degraded.lock().expect("degraded flag poisoned") = Some(e);
                self.offline.store(true, Ordering::Relaxed);
                Ok(substitute())
            }
            other => other,
        }
    }

    fn encode<B: serde::Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Api(format!("failed to encode request: {e}")))
    }

    // ---- Auth operations (no fallback; the controller decides) ----

    /// Log in. On success the returned token and profile are stored in the
    /// session store as a single unit.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = Self::encode(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response: AuthResponse = self.request(Method::POST, "/auth/login", Some(body)).await?;
        self.session.set(Session {
            token: response.token.clone(),
            user: response.user.clone(),
        });
        Ok(response)
    }

    /// Register a new account. Stores the session on success, like `login`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = Self::encode(request)?;
        let response: AuthResponse = self
            .request(Method::POST, "/auth/register", Some(body))
            .await?;
        self.session.set(Session {
            token: response.token.clone(),
            user: response.user.clone(),
        });
        Ok(response)
    }

    /// Fetch the profile bound to the stored token, refreshing the cached
    /// copy. Like the other auth operations this never substitutes; a 401
    /// clears the session as usual, and availability failures propagate so
    /// the controller can decide what an unreachable backend means.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let user: UserProfile = self.request(Method::GET, "/auth/me", None).await?;
        if let Some(session) = self.session.get() {
            self.session.set(Session {
                token: session.token,
                user: user.clone(),
            });
        }
        Ok(user)
    }

    /// Drop the local session. Never fails.
    pub fn logout(&self) {
        self.session.clear();
    }

    // ---- AOI operations ----

    pub async fn get_aois(&self) -> Result<Vec<Aoi>, ApiError> {
        let result = self.request(Method::GET, "/aois", None).await;
        self.degrade(result, fallback::aois)
    }

    pub async fn create_aoi(&self, request: &CreateAoiRequest) -> Result<Aoi, ApiError> {
        let body = Self::encode(request)?;
        let result = self.request(Method::POST, "/aois", Some(body)).await;
        self.degrade(result, || fallback::created_aoi(request))
    }

    pub async fn update_aoi(&self, id: &str, request: &UpdateAoiRequest) -> Result<Aoi, ApiError> {
        let body = Self::encode(request)?;
        let path = format!("/aois/{id}");
        let result = self.request(Method::PUT, &path, Some(body)).await;
        self.degrade(result, || fallback::updated_aoi(id, request))
    }

    pub async fn delete_aoi(&self, id: &str) -> Result<DeleteResponse, ApiError> {
        let path = format!("/aois/{id}");
        let result = self.request(Method::DELETE, &path, None).await;
        self.degrade(result, fallback::deleted)
    }

    // ---- Alert operations ----

    pub async fn get_alerts(&self, filter: &AlertFilter) -> Result<Vec<Alert>, ApiError> {
        let mut params = Vec::new();
        if let Some(status) = &filter.status {
            params.push(format!("status={status}"));
        }
        if let Some(alert_type) = &filter.alert_type {
            params.push(format!("type={alert_type}"));
        }
        let path = if params.is_empty() {
            "/alerts".to_string()
        } else {
            format!("/alerts?{}", params.join("&"))
        };
        let result = self.request(Method::GET, &path, None).await;
        self.degrade(result, fallback::alerts)
    }

    pub async fn create_alert(&self, request: &CreateAlertRequest) -> Result<Alert, ApiError> {
        let body = Self::encode(request)?;
        let result = self.request(Method::POST, "/alerts", Some(body)).await;
        self.degrade(result, || fallback::created_alert(request))
    }

    // ---- Glacial lake operations ----

    pub async fn get_glacial_lakes(&self, aoi_id: Option<&str>) -> Result<Vec<GlacialLake>, ApiError> {
        let path = match aoi_id {
            Some(id) => format!("/glacial-lakes?aoi_id={id}"),
            None => "/glacial-lakes".to_string(),
        };
        let result = self.request(Method::GET, &path, None).await;
        self.degrade(result, fallback::glacial_lakes)
    }

    pub async fn create_glacial_lake(&self, request: &CreateLakeRequest) -> Result<GlacialLake, ApiError> {
        let body = Self::encode(request)?;
        let result = self.request(Method::POST, "/glacial-lakes", Some(body)).await;
        self.degrade(result, || fallback::created_lake(request))
    }

    // ---- Report operations ----

    pub async fn get_reports(&self) -> Result<Vec<Report>, ApiError> {
        let result = self.request(Method::GET, "/reports", None).await;
        self.degrade(result, fallback::reports)
    }

    pub async fn generate_report(&self, request: &CreateReportRequest) -> Result<Report, ApiError> {
        let body = Self::encode(request)?;
        let result = self.request(Method::POST, "/reports", Some(body)).await;
        self.degrade(result, || fallback::created_report(request))
    }

    // ---- Aggregation ----

    /// Fetch the three dashboard lists concurrently. Each slice succeeds
    /// or fails on its own; the offline flag reflects whether any of them
    /// degraded to fallback data.
    pub async fn fetch_dashboard(&self) -> DashboardSnapshot {
        let default_filter = AlertFilter::default();
        let (aois, alerts, lakes) = tokio::join!(
            self.get_aois(),
            self.get_alerts(&default_filter),
            self.get_glacial_lakes(None),
        );
        DashboardSnapshot {
            aois,
            alerts,
            lakes,
            offline: self.is_offline(),
        }
    }
}
