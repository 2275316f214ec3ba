/**
 * Request Middleware
 */

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser, AUTH_COOKIE};
