//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, middleware layering
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! Routes are split by authentication requirement:
//!
//! 1. **Public Routes** - Registration and login
//! 2. **Protected Routes** - Everything else, behind the auth middleware
//! 3. **Fallback Handler** - JSON 404 for unknown routes
//!
//! # Route Types
//!
//! ## Authentication
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Current user profile (protected)
//!
//! ## Monitoring Resources (all protected)
//!
//! - `GET/POST /api/aois`, `PUT/DELETE /api/aois/{id}`
//! - `GET/POST /api/alerts`
//! - `GET/POST /api/glacial-lakes`
//! - `GET /api/reports`, `POST /api/reports`

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
