/**
 * Server Configuration
 *
 * Environment-driven configuration: the optional PostgreSQL pool, the
 * listen port, and the production flag that controls the `Secure`
 * attribute on auth cookies.
 *
 * # Error Handling
 *
 * A missing or unreachable database does not prevent startup. The pool is
 * set to `None` and data routes answer 503 until it is available; auth
 * token verification keeps working either way.
 */

use sqlx::PgPool;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Static server settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port, `SERVER_PORT`, default 3000
    pub port: u16,
    /// `APP_ENV=production` enables Secure cookies
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        let production = std::env::var("APP_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);
        Self { port, production }
    }
}

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL`, connects, and runs migrations. Returns `None`
/// when the variable is unset or the connection fails; the server then
/// runs with data routes degraded to 503.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Data routes will answer 503.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Data routes will answer 503.");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may have been applied out of band
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing - database might not be up to date");
        }
    }

    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Relies on the test environment not setting these variables
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 3000);
        assert!(!config.production);
    }
}
