/**
 * API Route Wiring
 *
 * Two route groups: the public authentication endpoints and everything
 * that requires a verified token. The split exists so the router can
 * layer the auth middleware onto the protected group only.
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::alerts;
use crate::backend::aoi;
use crate::backend::auth::handlers::{login, me, register};
use crate::backend::lakes;
use crate::backend::reports;
use crate::backend::server::state::AppState;

/// Routes reachable without a token.
///
/// - `POST /api/auth/register` - User registration
/// - `POST /api/auth/login` - User login
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes behind the auth middleware.
///
/// - `GET /api/auth/me` - Current user profile
/// - `GET /api/aois` / `POST /api/aois` - List and create AOIs
/// - `PUT /api/aois/{id}` / `DELETE /api/aois/{id}` - Owner-scoped update and delete
/// - `GET /api/alerts` / `POST /api/alerts` - List (filtered) and raise alerts
/// - `GET /api/glacial-lakes` / `POST /api/glacial-lakes` - List and register lakes
/// - `GET /api/reports` / `POST /api/reports` - List and generate reports
pub fn protected_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/aois", get(aoi::get_aois).post(aoi::create_aoi))
        .route(
            "/api/aois/{id}",
            put(aoi::update_aoi).delete(aoi::delete_aoi),
        )
        .route(
            "/api/alerts",
            get(alerts::get_alerts).post(alerts::create_alert),
        )
        .route(
            "/api/glacial-lakes",
            get(lakes::get_glacial_lakes).post(lakes::create_glacial_lake),
        )
        .route(
            "/api/reports",
            get(reports::get_reports).post(reports::generate_report),
        )
}
