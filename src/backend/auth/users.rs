/**
 * User Model and Database Operations
 *
 * The server-side identity record and its queries. The password hash
 * stays inside this module's `User` struct and is stripped by
 * `User::profile` before anything crosses the wire.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::models::UserProfile;

/// User row in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    /// Role label, "user" by default
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// The wire-safe subset of this identity.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            role: self.role.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` / `email` / `organization` / `phone` - profile fields
/// * `password_hash` - bcrypt hash, never the plaintext
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    organization: Option<&str>,
    phone: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, organization, phone, role, created_at, last_login)
        VALUES ($1, $2, $3, $4, $5, $6, 'user', $7, $7)
        RETURNING id, name, email, password_hash, organization, phone, role, created_at, last_login
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(organization)
    .bind(phone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email, or `None` if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, organization, phone, role, created_at, last_login
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID, or `None` if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, organization, phone, role, created_at, last_login
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Record a successful login
pub async fn touch_last_login(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_strips_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            organization: Some("ISRO".to_string()),
            phone: None,
            role: "user".to_string(),
            created_at: Utc::now(),
            last_login: None,
        };

        let profile = user.profile();
        assert_eq!(profile.email, user.email);
        assert_eq!(profile.id, user.id.to_string());
        // The serialized profile must not contain the hash
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("secret"));
    }
}
