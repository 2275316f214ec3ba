/**
 * AOI Handlers
 *
 * All routes here sit behind the auth middleware; the authenticated
 * identity scopes every query.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::aoi::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::api::{CreateAoiRequest, DeleteResponse, UpdateAoiRequest};
use crate::shared::models::Aoi;

/// GET /api/aois - list the caller's AOIs with lake statistics
pub async fn get_aois(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Aoi>>, BackendError> {
    let pool = state.require_pool()?.clone();
    let aois = db::list_aois(&pool, user.user_id).await?;
    tracing::debug!("Listed {} AOIs for {}", aois.len(), user.email);
    Ok(Json(aois))
}

/// POST /api/aois - create an AOI owned by the caller
pub async fn create_aoi(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateAoiRequest>,
) -> Result<Json<Aoi>, BackendError> {
    let pool = state.require_pool()?.clone();

    if request.name.trim().is_empty() {
        return Err(BackendError::validation("Name is required"));
    }
    if request.location.trim().is_empty() {
        return Err(BackendError::validation("Location is required"));
    }
    if request.coordinates.trim().is_empty() {
        return Err(BackendError::validation("Coordinates are required"));
    }

    let aoi = db::create_aoi(&pool, user.user_id, &request).await?;
    tracing::info!("AOI created: {} by {}", aoi.id, user.email);
    Ok(Json(aoi))
}

/// PUT /api/aois/{id} - update an AOI, owner only
pub async fn update_aoi(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateAoiRequest>,
) -> Result<Json<Aoi>, BackendError> {
    let pool = state.require_pool()?.clone();

    if request.name.trim().is_empty() {
        return Err(BackendError::validation("Name is required"));
    }

    match db::update_aoi(&pool, user.user_id, &id, &request).await? {
        Some(aoi) => {
            tracing::info!("AOI updated: {} by {}", aoi.id, user.email);
            Ok(Json(aoi))
        }
        None => Err(BackendError::not_found("AOI not found")),
    }
}

/// DELETE /api/aois/{id} - delete an AOI, owner only
pub async fn delete_aoi(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    let pool = state.require_pool()?.clone();

    if db::delete_aoi(&pool, user.user_id, &id).await? {
        tracing::info!("AOI deleted: {} by {}", id, user.email);
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(BackendError::not_found("AOI not found"))
    }
}
