/**
 * Glacial Lake Database Operations
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::api::CreateLakeRequest;
use crate::shared::models::GlacialLake;

fn new_lake_id() -> String {
    format!("LAKE-{}", Uuid::new_v4())
}

/// List lakes, newest first, optionally restricted to one AOI.
pub async fn list_lakes(
    pool: &PgPool,
    aoi_id: Option<&str>,
) -> Result<Vec<GlacialLake>, sqlx::Error> {
    let lakes = sqlx::query_as::<_, GlacialLake>(
        r#"
        SELECT id, name, aoi_id, coordinates, area_km2, elevation_m,
               risk_level, status, last_updated, created_at
        FROM glacial_lakes
        WHERE ($1::text IS NULL OR aoi_id = $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(aoi_id)
    .fetch_all(pool)
    .await?;

    Ok(lakes)
}

/// Register a lake. New lakes start as "active".
pub async fn create_lake(
    pool: &PgPool,
    request: &CreateLakeRequest,
) -> Result<GlacialLake, sqlx::Error> {
    let now = Utc::now();
    let risk_level = request.risk_level.as_deref().unwrap_or("low");

    let lake = sqlx::query_as::<_, GlacialLake>(
        r#"
        INSERT INTO glacial_lakes (id, name, aoi_id, coordinates, area_km2, elevation_m, risk_level, status, last_updated, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8, $8)
        RETURNING id, name, aoi_id, coordinates, area_km2, elevation_m,
                  risk_level, status, last_updated, created_at
        "#,
    )
    .bind(new_lake_id())
    .bind(&request.name)
    .bind(&request.aoi_id)
    .bind(&request.coordinates)
    .bind(request.area_km2)
    .bind(request.elevation_m)
    .bind(risk_level)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(lake)
}
