/**
 * API Request and Response Types
 *
 * DTOs for the HTTP surface. These are shared so the axum handlers and the
 * client access layer agree on shapes by construction.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::UserProfile;

/// Registration request
///
/// Contains the profile fields collected by the signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// Plaintext password; hashed with bcrypt before storage
    pub password: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Contains the bearer token and the
/// profile the client caches next to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    /// Signed JWT, 24-hour expiry
    pub token: String,
}

/// Fields accepted when creating an AOI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAoiRequest {
    pub name: String,
    pub location: String,
    pub coordinates: String,
    pub description: Option<String>,
    /// Defaults to "medium" when unset
    pub priority: Option<String>,
}

/// Fields accepted when updating an AOI. Owner only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAoiRequest {
    pub name: String,
    pub location: String,
    pub coordinates: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
}

/// Fields accepted when creating an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub aoi_id: Option<String>,
    pub lake_id: Option<String>,
    /// Defaults to "medium" when unset
    pub severity: Option<String>,
}

/// Query filter for listing alerts. `None` (or "all" on the wire) means
/// no filtering on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
}

/// Fields accepted when registering a glacial lake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLakeRequest {
    pub name: String,
    pub aoi_id: Option<String>,
    pub coordinates: Option<String>,
    pub area_km2: f64,
    pub elevation_m: Option<f64>,
    /// Defaults to "low" when unset
    pub risk_level: Option<String>,
}

/// Fields accepted when requesting report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
    pub report_type: String,
    pub aoi_id: Option<String>,
    pub time_period: Option<String>,
    pub parameters: Option<serde_json::Value>,
}

/// Response for DELETE operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_filter_renames_type() {
        let filter = AlertFilter {
            status: Some("active".to_string()),
            alert_type: Some("expansion".to_string()),
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["type"], "expansion");
        assert_eq!(json["status"], "active");
    }
}
