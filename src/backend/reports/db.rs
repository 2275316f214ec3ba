/**
 * Report Database Operations
 *
 * `parameters` and `content` live in JSONB columns, so rows are fetched
 * through an intermediate struct that wraps them in `sqlx::types::Json`
 * before conversion to the wire model.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::api::CreateReportRequest;
use crate::shared::models::{Report, ReportContent};

fn new_report_id() -> String {
    format!("RPT-{}", Uuid::new_v4())
}

#[derive(Debug, sqlx::FromRow)]
struct ReportRow {
    id: String,
    title: String,
    report_type: String,
    aoi_id: Option<String>,
    time_period: Option<String>,
    parameters: Option<Json<serde_json::Value>>,
    content: Option<Json<ReportContent>>,
    status: String,
    file_size: Option<i64>,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            id: row.id,
            title: row.title,
            report_type: row.report_type,
            aoi_id: row.aoi_id,
            time_period: row.time_period,
            parameters: row.parameters.map(|p| p.0),
            content: row.content.map(|c| c.0),
            status: row.status,
            file_size: row.file_size,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// List the reports created by `owner`, newest first.
pub async fn list_reports(pool: &PgPool, owner: Uuid) -> Result<Vec<Report>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReportRow>(
        r#"
        SELECT id, title, report_type, aoi_id, time_period, parameters, content,
               status, file_size, created_by, created_at, updated_at
        FROM reports
        WHERE created_by = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Report::from).collect())
}

/// Store a generated report owned by `owner`.
pub async fn create_report(
    pool: &PgPool,
    owner: Uuid,
    request: &CreateReportRequest,
    content: &ReportContent,
    file_size: i64,
) -> Result<Report, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, ReportRow>(
        r#"
        INSERT INTO reports (id, title, report_type, aoi_id, time_period, parameters, content, status, file_size, created_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'completed', $8, $9, $10, $10)
        RETURNING id, title, report_type, aoi_id, time_period, parameters, content,
                  status, file_size, created_by, created_at, updated_at
        "#,
    )
    .bind(new_report_id())
    .bind(&request.title)
    .bind(&request.report_type)
    .bind(&request.aoi_id)
    .bind(&request.time_period)
    .bind(request.parameters.clone().map(Json))
    .bind(Json(content.clone()))
    .bind(file_size)
    .bind(owner.to_string())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(Report::from(row))
}
