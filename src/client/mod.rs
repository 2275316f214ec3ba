/**
 * Client-Side API Access Layer
 *
 * Everything a frontend needs to talk to the backend: base-URL
 * configuration, session persistence, the request wrapper with offline
 * fallback, and the auth session controller.
 *
 * The pieces are explicitly constructed and injected rather than held in
 * module-level singletons, so tests (and multiple UI instances) can run
 * isolated clients side by side.
 */

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fallback;
pub mod session;

pub use api::{ApiClient, DashboardSnapshot};
pub use auth::{AuthController, AuthState};
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{Session, SessionStore};
