/**
 * Alert Handlers
 */

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::backend::alerts::db;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{AlertFilter, CreateAlertRequest};
use crate::shared::models::Alert;

/// Treat a missing value and the literal "all" the same: no filter.
fn normalize(value: Option<&str>) -> Option<&str> {
    match value {
        Some("all") | None => None,
        other => other,
    }
}

/// GET /api/alerts - list alerts, optionally filtered by status and type
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(filter): Query<AlertFilter>,
) -> Result<Json<Vec<Alert>>, BackendError> {
    let pool = state.require_pool()?.clone();

    let alerts = db::list_alerts(
        &pool,
        normalize(filter.status.as_deref()),
        normalize(filter.alert_type.as_deref()),
    )
    .await?;

    tracing::debug!("Listed {} alerts", alerts.len());
    Ok(Json(alerts))
}

/// POST /api/alerts - raise a new alert
pub async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> Result<Json<Alert>, BackendError> {
    let pool = state.require_pool()?.clone();

    if request.title.trim().is_empty() {
        return Err(BackendError::validation("Title is required"));
    }
    if request.message.trim().is_empty() {
        return Err(BackendError::validation("Message is required"));
    }

    let alert = db::create_alert(&pool, &request).await?;
    tracing::info!("Alert created: {} ({})", alert.id, alert.severity);
    Ok(Json(alert))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_treats_all_as_unfiltered() {
        assert_eq!(normalize(Some("all")), None);
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("active")), Some("active"));
    }
}
