/**
 * Offline Fallback Data
 *
 * Deterministic canned datasets substituted when the backend is
 * unreachable, plus synthesized success responses for write operations.
 * The shapes match live responses exactly; the only sign of degradation is
 * the client's offline flag.
 *
 * The snapshot mirrors a plausible mid-June 2024 state of the Ladakh and
 * Sikkim monitoring regions.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::api::{
    CreateAlertRequest, CreateAoiRequest, CreateLakeRequest, CreateReportRequest, DeleteResponse,
    UpdateAoiRequest,
};
use crate::shared::models::{Alert, Aoi, GlacialLake, Report, ReportContent, UserProfile};

/// Reserved demo login email.
pub const DEMO_EMAIL: &str = "demo@geosentinel.com";
/// Reserved demo login password.
pub const DEMO_PASSWORD: &str = "demo123";
/// Locally generated token for the demo identity. Not server-signed; it
/// authenticates nothing, it only keeps the session shape intact offline.
pub const DEMO_TOKEN: &str = "demo-token-123";

fn day(s: &str) -> DateTime<Utc> {
    s.parse().expect("static fallback timestamp is valid")
}

/// The demo identity used by the login bypass.
pub fn demo_user() -> UserProfile {
    UserProfile {
        id: "demo-user-1".to_string(),
        name: "Dr. Demo User".to_string(),
        email: DEMO_EMAIL.to_string(),
        organization: Some("ISRO - Demo".to_string()),
        role: "Senior Scientist".to_string(),
        phone: Some("+91-9876543210".to_string()),
    }
}

/// Canned AOI listing.
pub fn aois() -> Vec<Aoi> {
    vec![
        Aoi {
            id: "AOI-001".to_string(),
            name: "Pangong Tso Region".to_string(),
            location: "Leh, Ladakh".to_string(),
            coordinates: "33.7500 N, 78.9000 E".to_string(),
            description: Some("156.7 km² basin, stable".to_string()),
            priority: "low".to_string(),
            status: "active".to_string(),
            created_by: None,
            created_at: day("2024-01-10T00:00:00Z"),
            updated_at: day("2024-06-15T00:00:00Z"),
            lake_count: 8,
            total_lake_area: 12.3,
            high_risk_lakes: 0,
        },
        Aoi {
            id: "AOI-007".to_string(),
            name: "Tso Moriri Basin".to_string(),
            location: "Leh, Ladakh".to_string(),
            coordinates: "32.9000 N, 78.3000 E".to_string(),
            description: Some("234.5 km² basin, rapid expansion".to_string()),
            priority: "high".to_string(),
            status: "critical".to_string(),
            created_by: None,
            created_at: day("2024-02-02T00:00:00Z"),
            updated_at: day("2024-06-15T00:00:00Z"),
            lake_count: 12,
            total_lake_area: 18.7,
            high_risk_lakes: 3,
        },
        Aoi {
            id: "AOI-012".to_string(),
            name: "Gurudongmar Region".to_string(),
            location: "North Sikkim".to_string(),
            coordinates: "27.7000 N, 88.5000 E".to_string(),
            description: Some("89.2 km² basin, seasonal growth".to_string()),
            priority: "medium".to_string(),
            status: "monitoring".to_string(),
            created_by: None,
            created_at: day("2024-03-20T00:00:00Z"),
            updated_at: day("2024-06-14T00:00:00Z"),
            lake_count: 5,
            total_lake_area: 7.8,
            high_risk_lakes: 1,
        },
    ]
}

/// Canned alert listing.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT-001".to_string(),
            alert_type: "expansion".to_string(),
            title: "Rapid Lake Expansion Detected".to_string(),
            message: "Glacial lake has expanded by 2.3 km² in 15 days. Immediate assessment required."
                .to_string(),
            aoi_id: Some("AOI-007".to_string()),
            lake_id: Some("LAKE-002".to_string()),
            severity: "critical".to_string(),
            status: "active".to_string(),
            created_at: day("2024-06-15T14:30:00Z"),
            updated_at: day("2024-06-15T14:30:00Z"),
        },
        Alert {
            id: "ALT-002".to_string(),
            alert_type: "growth-anomaly".to_string(),
            title: "Unusual Growth Pattern".to_string(),
            message: "Lake growth rate 300% above historical average for this season.".to_string(),
            aoi_id: Some("AOI-012".to_string()),
            lake_id: None,
            severity: "high".to_string(),
            status: "acknowledged".to_string(),
            created_at: day("2024-06-14T09:15:00Z"),
            updated_at: day("2024-06-14T11:00:00Z"),
        },
    ]
}

/// Canned glacial-lake listing.
pub fn glacial_lakes() -> Vec<GlacialLake> {
    vec![
        GlacialLake {
            id: "LAKE-001".to_string(),
            name: "Pangong Lake".to_string(),
            aoi_id: Some("AOI-001".to_string()),
            coordinates: Some("33.7589 N, 78.6640 E".to_string()),
            area_km2: 12.3,
            elevation_m: Some(4225.0),
            risk_level: "medium".to_string(),
            status: "active".to_string(),
            last_updated: day("2024-06-15T00:00:00Z"),
            created_at: day("2024-01-10T00:00:00Z"),
        },
        GlacialLake {
            id: "LAKE-002".to_string(),
            name: "Tso Moriri".to_string(),
            aoi_id: Some("AOI-007".to_string()),
            coordinates: Some("32.9040 N, 78.3250 E".to_string()),
            area_km2: 18.7,
            elevation_m: Some(4522.0),
            risk_level: "high".to_string(),
            status: "active".to_string(),
            last_updated: day("2024-06-15T00:00:00Z"),
            created_at: day("2024-02-02T00:00:00Z"),
        },
        GlacialLake {
            id: "LAKE-003".to_string(),
            name: "Gurudongmar Lake".to_string(),
            aoi_id: Some("AOI-012".to_string()),
            coordinates: Some("28.0257 N, 88.7095 E".to_string()),
            area_km2: 7.8,
            elevation_m: Some(5183.0),
            risk_level: "low".to_string(),
            status: "active".to_string(),
            last_updated: day("2024-06-14T00:00:00Z"),
            created_at: day("2024-03-20T00:00:00Z"),
        },
    ]
}

/// Canned report listing.
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: "RPT-001".to_string(),
            title: "Monthly Glacial Lake Assessment - June 2024".to_string(),
            report_type: "comprehensive".to_string(),
            aoi_id: Some("AOI-007".to_string()),
            time_period: Some("2024-06".to_string()),
            parameters: None,
            content: None,
            status: "ready".to_string(),
            file_size: Some(2_400_000),
            created_by: None,
            created_at: day("2024-06-15T00:00:00Z"),
            updated_at: day("2024-06-15T00:00:00Z"),
        },
        Report {
            id: "RPT-002".to_string(),
            title: "Risk Assessment Summary - Sikkim Region".to_string(),
            report_type: "risk-analysis".to_string(),
            aoi_id: Some("AOI-012".to_string()),
            time_period: Some("2024-Q2".to_string()),
            parameters: None,
            content: None,
            status: "ready".to_string(),
            file_size: Some(1_800_000),
            created_by: None,
            created_at: day("2024-06-14T00:00:00Z"),
            updated_at: day("2024-06-14T00:00:00Z"),
        },
    ]
}

fn generated_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Synthesized success for AOI creation: echoes the input with a generated
/// id and current timestamps. Nothing is persisted.
pub fn created_aoi(request: &CreateAoiRequest) -> Aoi {
    let now = Utc::now();
    Aoi {
        id: generated_id("AOI"),
        name: request.name.clone(),
        location: request.location.clone(),
        coordinates: request.coordinates.clone(),
        description: request.description.clone(),
        priority: request.priority.clone().unwrap_or_else(|| "medium".to_string()),
        status: "active".to_string(),
        created_by: None,
        created_at: now,
        updated_at: now,
        lake_count: 0,
        total_lake_area: 0.0,
        high_risk_lakes: 0,
    }
}

/// Synthesized success for AOI update.
pub fn updated_aoi(id: &str, request: &UpdateAoiRequest) -> Aoi {
    let now = Utc::now();
    Aoi {
        id: id.to_string(),
        name: request.name.clone(),
        location: request.location.clone(),
        coordinates: request.coordinates.clone(),
        description: request.description.clone(),
        priority: request.priority.clone(),
        status: request.status.clone(),
        created_by: None,
        created_at: now,
        updated_at: now,
        lake_count: 0,
        total_lake_area: 0.0,
        high_risk_lakes: 0,
    }
}

/// Synthesized success for deletions.
pub fn deleted() -> DeleteResponse {
    DeleteResponse { success: true }
}

/// Synthesized success for alert creation.
pub fn created_alert(request: &CreateAlertRequest) -> Alert {
    let now = Utc::now();
    Alert {
        id: generated_id("ALT"),
        alert_type: request.alert_type.clone(),
        title: request.title.clone(),
        message: request.message.clone(),
        aoi_id: request.aoi_id.clone(),
        lake_id: request.lake_id.clone(),
        severity: request.severity.clone().unwrap_or_else(|| "medium".to_string()),
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Synthesized success for lake creation.
pub fn created_lake(request: &CreateLakeRequest) -> GlacialLake {
    let now = Utc::now();
    GlacialLake {
        id: generated_id("LAKE"),
        name: request.name.clone(),
        aoi_id: request.aoi_id.clone(),
        coordinates: request.coordinates.clone(),
        area_km2: request.area_km2,
        elevation_m: request.elevation_m,
        risk_level: request.risk_level.clone().unwrap_or_else(|| "low".to_string()),
        status: "active".to_string(),
        last_updated: now,
        created_at: now,
    }
}

/// Synthesized success for report generation.
pub fn created_report(request: &CreateReportRequest) -> Report {
    let now = Utc::now();
    Report {
        id: generated_id("RPT"),
        title: request.title.clone(),
        report_type: request.report_type.clone(),
        aoi_id: request.aoi_id.clone(),
        time_period: request.time_period.clone(),
        parameters: request.parameters.clone(),
        content: Some(ReportContent {
            summary: "Comprehensive analysis of glacial lake changes".to_string(),
            key_findings: vec![
                "Lake area increased by 15.3% over the monitoring period".to_string(),
                "3 new lakes detected in the region".to_string(),
                "Risk level elevated to HIGH for 2 existing lakes".to_string(),
            ],
            recommendations: vec![
                "Increase monitoring frequency for high-risk lakes".to_string(),
                "Deploy ground sensors for real-time monitoring".to_string(),
                "Coordinate with local authorities for emergency preparedness".to_string(),
            ],
            data_points: 7500,
            analysis_date: now,
        }),
        status: "completed".to_string(),
        file_size: Some(2_100_000),
        created_by: None,
        created_at: now,
        updated_at: now,
    }
}
