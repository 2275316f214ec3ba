/**
 * Router Configuration
 *
 * Assembles the public and protected route groups into one router.
 * The protected group carries the auth middleware as a route layer, so a
 * request without a verified token is rejected before any handler or
 * database work happens.
 */

use axum::{http::StatusCode, middleware, response::IntoResponse, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{protected_api_routes, public_api_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared application state (database pool, JWT keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = protected_api_routes().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_api_routes())
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// JSON 404 for unknown routes, same envelope as handler errors.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "status": 404 })),
    )
}
