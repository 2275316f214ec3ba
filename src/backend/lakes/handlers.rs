/**
 * Glacial Lake Handlers
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::lakes::db;
use crate::backend::server::state::AppState;
use crate::shared::api::CreateLakeRequest;
use crate::shared::models::GlacialLake;

#[derive(Debug, Deserialize)]
pub struct LakeFilter {
    pub aoi_id: Option<String>,
}

/// GET /api/glacial-lakes - list lakes, optionally for a single AOI
pub async fn get_glacial_lakes(
    State(state): State<AppState>,
    Query(filter): Query<LakeFilter>,
) -> Result<Json<Vec<GlacialLake>>, BackendError> {
    let pool = state.require_pool()?.clone();
    let lakes = db::list_lakes(&pool, filter.aoi_id.as_deref()).await?;
    tracing::debug!("Listed {} glacial lakes", lakes.len());
    Ok(Json(lakes))
}

/// POST /api/glacial-lakes - register a lake
pub async fn create_glacial_lake(
    State(state): State<AppState>,
    Json(request): Json<CreateLakeRequest>,
) -> Result<Json<GlacialLake>, BackendError> {
    let pool = state.require_pool()?.clone();

    if request.name.trim().is_empty() {
        return Err(BackendError::validation("Name is required"));
    }
    if request.area_km2 < 0.0 {
        return Err(BackendError::validation("Area must be non-negative"));
    }

    let lake = db::create_lake(&pool, &request).await?;
    tracing::info!("Glacial lake registered: {} ({})", lake.id, lake.name);
    Ok(Json(lake))
}
