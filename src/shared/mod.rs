/**
 * Shared Types
 *
 * Types used on both sides of the wire: domain records returned by the
 * backend (and by the client's offline fallback) and the request/response
 * DTOs for the HTTP API.
 */

pub mod api;
pub mod models;

pub use api::{
    AlertFilter, AuthResponse, CreateAlertRequest, CreateAoiRequest, CreateLakeRequest,
    CreateReportRequest, DeleteResponse, LoginRequest, RegisterRequest, UpdateAoiRequest,
};
pub use models::{Alert, Aoi, GlacialLake, Report, ReportContent, UserProfile};
