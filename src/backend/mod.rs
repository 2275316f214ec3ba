/**
 * Backend Server
 *
 * Axum HTTP server for the monitoring API: JWT authentication, per-resource
 * CRUD handlers backed by PostgreSQL, and the middleware that verifies
 * credentials on every protected route.
 */

pub mod alerts;
pub mod aoi;
pub mod auth;
pub mod error;
pub mod lakes;
pub mod middleware;
pub mod reports;
pub mod routes;
pub mod server;
