/**
 * Server Initialization
 *
 * Builds the Axum application: load configuration, connect the optional
 * database pool, construct the JWT keys, and assemble the router.
 *
 * # Error Handling
 *
 * Initialization is resilient. A missing database leaves data routes
 * answering 503; a missing `JWT_SECRET` falls back to the development
 * secret with a loud warning. Neither prevents startup.
 */

use axum::Router;

use crate::backend::auth::sessions::JwtKeys;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// The configured router and the server settings it was built with.
pub async fn create_app() -> (Router<()>, ServerConfig) {
    tracing::info!("Initializing GeoSentinel backend server");

    let config = ServerConfig::from_env();

    let db_pool = load_database().await;

    let jwt = JwtKeys::from_env();
    if jwt.is_dev_secret() {
        tracing::warn!("JWT_SECRET not set, using the development secret. Do not deploy this.");
    }

    let app_state = AppState::new(db_pool, jwt, config.production);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    (app, config)
}
