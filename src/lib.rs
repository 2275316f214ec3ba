//! GeoSentinel - Main Library
//!
//! GeoSentinel is a glacial-lake monitoring platform. Areas of interest
//! (AOIs) in high-altitude regions are tracked for lake growth, and alerts
//! and reports are produced for the scientists watching them.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and backend
//!   - Domain records (AOIs, glacial lakes, alerts, reports)
//!   - Request/response DTOs for the HTTP API
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server with JWT authentication
//!   - sqlx persistence against PostgreSQL
//!   - Per-resource route handlers
//!
//! - **`client`** - The authenticated API-access layer
//!   - Session store (bearer token + cached profile)
//!   - Request wrapper with transparent offline fallback
//!   - Auth session controller with demo-credential bypass
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend modules and the
//!   `geosentinel-server` binary. The client layer compiles without it, so
//!   UI frontends can depend on this crate without pulling in axum or sqlx.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use geosentinel::backend::server::init::create_app;
//!
//! # async fn example() {
//! let (app, config) = create_app().await;
//! // Serve `app` with axum on `config.port`
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use geosentinel::client::{ApiClient, ClientConfig, SessionStore};
//!
//! # async fn example() {
//! let session = SessionStore::new();
//! let client = ApiClient::new(ClientConfig::from_env(), session);
//! let snapshot = client.fetch_dashboard().await;
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// Client-side API access layer
pub mod client;
