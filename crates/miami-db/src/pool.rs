//! PostgreSQL connection pool management
//!
//! Provides utilities for creating connection pools from a `DATABASE_URL`.

use miami_core::config::DatabaseConfig;
use miami_core::{AppError, AppResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, warn};

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}

/// Create a PostgreSQL connection pool and check it with `SELECT 1`
///
/// # Example
///
/// ```no_run
/// use miami_core::config::DatabaseConfig;
/// use miami_db::create_pool;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool("postgresql://localhost/miami", &DatabaseConfig::default()).await?;
///     Ok(())
/// }
/// ```
pub async fn create_pool(database_url: &str, config: &DatabaseConfig) -> AppResult<PgPool> {
    info!("Creating database connection pool");

    let pool = pool_options(config)
        .connect(database_url)
        .await
        .map_err(|e| {
            warn!("Failed to create database pool: {}", e);
            AppError::Pool(format!("Failed to connect to database: {}", e))
        })?;

    info!(
        "Database pool created successfully with {} max connections",
        config.max_connections
    );

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Database health check failed: {}", e)))?;

    info!("Database connection verified");

    Ok(pool)
}

/// Create a pool that opens its first connection on first use
///
/// Only the URL syntax is checked here; connection failures surface from the
/// first statement executed, alongside any other database error.
pub fn connect_lazy(database_url: &str, config: &DatabaseConfig) -> AppResult<PgPool> {
    pool_options(config).connect_lazy(database_url).map_err(|e| {
        warn!("Invalid database URL: {}", e);
        AppError::Pool(format!("Invalid database URL: {}", e))
    })
}
