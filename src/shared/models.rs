/**
 * Domain Records
 *
 * Flat records for the monitored resources. The backend serves these from
 * PostgreSQL and the client's offline fallback fabricates the same shapes,
 * so a caller cannot tell a live response from a degraded one by structure.
 *
 * Ownership is established through `created_by`, which holds the user id of
 * the creating identity. Fallback data leaves it unset.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized user profile cached by the client next to its token.
///
/// A subset of the server-side identity: the password hash never crosses
/// the wire in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id (UUID string, or a locally generated id in demo mode)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Organization, if provided at registration
    pub organization: Option<String>,
    /// Role label (e.g. "user", "Senior Scientist")
    pub role: String,
    /// Contact phone, if provided
    pub phone: Option<String>,
}

/// Area of Interest: a user-defined geographic region under monitoring.
///
/// List responses carry aggregated lake statistics computed from the
/// `glacial_lakes` rows attached to the AOI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Aoi {
    pub id: String,
    pub name: String,
    /// Human-readable location, e.g. "Leh, Ladakh"
    pub location: String,
    /// Display coordinates, e.g. "33.7500 N, 78.9000 E"
    pub coordinates: String,
    pub description: Option<String>,
    /// Monitoring priority: "low" | "medium" | "high"
    pub priority: String,
    /// Lifecycle status: "active" | "monitoring" | "critical"
    pub status: String,
    /// Owning user id; unset in fallback data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of lakes tracked inside this AOI
    #[serde(default)]
    pub lake_count: i64,
    /// Sum of lake areas in km²
    #[serde(default)]
    pub total_lake_area: f64,
    /// Lakes currently classified as high risk
    #[serde(default)]
    pub high_risk_lakes: i64,
}

/// A single monitored glacial lake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct GlacialLake {
    pub id: String,
    pub name: String,
    /// AOI this lake belongs to, when assigned
    pub aoi_id: Option<String>,
    pub coordinates: Option<String>,
    /// Surface area in km²
    pub area_km2: f64,
    /// Elevation in metres above sea level
    pub elevation_m: Option<f64>,
    /// Risk classification: "low" | "medium" | "high"
    pub risk_level: String,
    pub status: String,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Alert raised against an AOI or a specific lake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Alert {
    pub id: String,
    /// Alert category, e.g. "expansion", "growth-anomaly"
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub aoi_id: Option<String>,
    pub lake_id: Option<String>,
    /// "low" | "medium" | "high" | "critical"
    pub severity: String,
    /// "active" | "acknowledged" | "resolved"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Generated report over an AOI and time period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    /// Report category, e.g. "comprehensive", "risk-analysis"
    pub report_type: String,
    pub aoi_id: Option<String>,
    /// Requested window, e.g. "2024-05" or "last-30-days"
    pub time_period: Option<String>,
    /// Free-form generation parameters, echoed back verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    /// Generated content; absent while a report is pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ReportContent>,
    pub status: String,
    /// Approximate artifact size in bytes
    pub file_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stub report body.
///
/// Real content generation (imagery analysis, chart rendering, PDF layout)
/// is delegated to external services; the backend only assembles this
/// summary structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContent {
    pub summary: String,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub data_points: i64,
    pub analysis_date: DateTime<Utc>,
}
