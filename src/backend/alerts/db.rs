/**
 * Alert Database Operations
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::api::CreateAlertRequest;
use crate::shared::models::Alert;

fn new_alert_id() -> String {
    format!("ALT-{}", Uuid::new_v4())
}

/// List alerts, newest first. `None` filters match everything.
pub async fn list_alerts(
    pool: &PgPool,
    status: Option<&str>,
    alert_type: Option<&str>,
) -> Result<Vec<Alert>, sqlx::Error> {
    let alerts = sqlx::query_as::<_, Alert>(
        r#"
        SELECT id, alert_type, title, message, aoi_id, lake_id,
               severity, status, created_at, updated_at
        FROM alerts
        WHERE ($1::text IS NULL OR status = $1)
          AND ($2::text IS NULL OR alert_type = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(status)
    .bind(alert_type)
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// Create an alert. New alerts start in the "active" state.
pub async fn create_alert(
    pool: &PgPool,
    request: &CreateAlertRequest,
) -> Result<Alert, sqlx::Error> {
    let now = Utc::now();
    let severity = request.severity.as_deref().unwrap_or("medium");

    let alert = sqlx::query_as::<_, Alert>(
        r#"
        INSERT INTO alerts (id, alert_type, title, message, aoi_id, lake_id, severity, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8, $8)
        RETURNING id, alert_type, title, message, aoi_id, lake_id,
                  severity, status, created_at, updated_at
        "#,
    )
    .bind(new_alert_id())
    .bind(&request.alert_type)
    .bind(&request.title)
    .bind(&request.message)
    .bind(&request.aoi_id)
    .bind(&request.lake_id)
    .bind(severity)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(alert)
}
