/**
 * Report Handlers
 *
 * Generation is synchronous and stubbed: real imagery analysis is an
 * external pipeline, so the handler assembles a fixed summary and stores
 * the report already completed.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::reports::db;
use crate::backend::server::state::AppState;
use crate::shared::api::CreateReportRequest;
use crate::shared::models::{Report, ReportContent};

/// Approximate size of the generated artifact in bytes.
const STUB_FILE_SIZE: i64 = 2_100_000;

fn stub_content() -> ReportContent {
    ReportContent {
        summary: "Comprehensive analysis of glacial lake changes".to_string(),
        key_findings: vec![
            "Lake area increased by 15.3% over the monitoring period".to_string(),
            "3 new lakes detected in the region".to_string(),
            "Risk level elevated to HIGH for 2 existing lakes".to_string(),
        ],
        recommendations: vec![
            "Increase monitoring frequency for high-risk lakes".to_string(),
            "Deploy ground sensors for real-time monitoring".to_string(),
            "Coordinate with local authorities for emergency preparedness".to_string(),
        ],
        data_points: 7500,
        analysis_date: Utc::now(),
    }
}

/// GET /api/reports - list the caller's reports
pub async fn get_reports(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Report>>, BackendError> {
    let pool = state.require_pool()?.clone();
    let reports = db::list_reports(&pool, user.user_id).await?;
    tracing::debug!("Listed {} reports for {}", reports.len(), user.email);
    Ok(Json(reports))
}

/// POST /api/reports - generate and store a report
pub async fn generate_report(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateReportRequest>,
) -> Result<Json<Report>, BackendError> {
    let pool = state.require_pool()?.clone();

    if request.title.trim().is_empty() {
        return Err(BackendError::validation("Title is required"));
    }
    if request.report_type.trim().is_empty() {
        return Err(BackendError::validation("Report type is required"));
    }

    let content = stub_content();
    let report = db::create_report(&pool, user.user_id, &request, &content, STUB_FILE_SIZE).await?;
    tracing::info!("Report generated: {} by {}", report.id, user.email);
    Ok(Json(report))
}
