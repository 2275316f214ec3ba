/**
 * AOI Database Operations
 *
 * Listings join against `glacial_lakes` to compute per-AOI statistics so
 * the client never has to issue a second query. Update and delete filter
 * on `created_by`; a miss on either id or owner reads the same as the row
 * not existing.
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::api::{CreateAoiRequest, UpdateAoiRequest};
use crate::shared::models::Aoi;

fn new_aoi_id() -> String {
    format!("AOI-{}", Uuid::new_v4())
}

/// List the AOIs owned by `owner`, newest first, with lake statistics.
pub async fn list_aois(pool: &PgPool, owner: Uuid) -> Result<Vec<Aoi>, sqlx::Error> {
    let aois = sqlx::query_as::<_, Aoi>(
        r#"
        SELECT a.id, a.name, a.location, a.coordinates, a.description,
               a.priority, a.status, a.created_by, a.created_at, a.updated_at,
               COUNT(l.id) AS lake_count,
               COALESCE(SUM(l.area_km2), 0) AS total_lake_area,
               COUNT(l.id) FILTER (WHERE l.risk_level = 'high') AS high_risk_lakes
        FROM aois a
        LEFT JOIN glacial_lakes l ON l.aoi_id = a.id
        WHERE a.created_by = $1
        GROUP BY a.id
        ORDER BY a.created_at DESC
        "#,
    )
    .bind(owner.to_string())
    .fetch_all(pool)
    .await?;

    Ok(aois)
}

/// Create an AOI owned by `owner`. A fresh AOI has no lakes, so the
/// statistics come back as literal zeros.
pub async fn create_aoi(
    pool: &PgPool,
    owner: Uuid,
    request: &CreateAoiRequest,
) -> Result<Aoi, sqlx::Error> {
    let now = Utc::now();
    let priority = request.priority.as_deref().unwrap_or("medium");

    let aoi = sqlx::query_as::<_, Aoi>(
        r#"
        INSERT INTO aois (id, name, location, coordinates, description, priority, status, created_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, 'active', $7, $8, $8)
        RETURNING id, name, location, coordinates, description, priority, status,
                  created_by, created_at, updated_at,
                  0::bigint AS lake_count,
                  0::double precision AS total_lake_area,
                  0::bigint AS high_risk_lakes
        "#,
    )
    .bind(new_aoi_id())
    .bind(&request.name)
    .bind(&request.location)
    .bind(&request.coordinates)
    .bind(&request.description)
    .bind(priority)
    .bind(owner.to_string())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(aoi)
}

/// Update an AOI, owner only. `None` means no row matched the id and
/// owner pair.
pub async fn update_aoi(
    pool: &PgPool,
    owner: Uuid,
    id: &str,
    request: &UpdateAoiRequest,
) -> Result<Option<Aoi>, sqlx::Error> {
    let aoi = sqlx::query_as::<_, Aoi>(
        r#"
        UPDATE aois
        SET name = $1, location = $2, coordinates = $3, description = $4,
            priority = $5, status = $6, updated_at = $7
        WHERE id = $8 AND created_by = $9
        RETURNING id, name, location, coordinates, description, priority, status,
                  created_by, created_at, updated_at,
                  (SELECT COUNT(*) FROM glacial_lakes l WHERE l.aoi_id = aois.id) AS lake_count,
                  (SELECT COALESCE(SUM(l.area_km2), 0) FROM glacial_lakes l WHERE l.aoi_id = aois.id) AS total_lake_area,
                  (SELECT COUNT(*) FROM glacial_lakes l WHERE l.aoi_id = aois.id AND l.risk_level = 'high') AS high_risk_lakes
        "#,
    )
    .bind(&request.name)
    .bind(&request.location)
    .bind(&request.coordinates)
    .bind(&request.description)
    .bind(&request.priority)
    .bind(&request.status)
    .bind(Utc::now())
    .bind(id)
    .bind(owner.to_string())
    .fetch_optional(pool)
    .await?;

    Ok(aoi)
}

/// Delete an AOI, owner only. Returns whether a row was removed.
pub async fn delete_aoi(pool: &PgPool, owner: Uuid, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM aois WHERE id = $1 AND created_by = $2")
        .bind(id)
        .bind(owner.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
