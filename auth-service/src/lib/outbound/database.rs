use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Startup failure returned to the caller instead of exiting the process.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open the connection pool and make sure the server answers.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, ConnectError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    Ok(pool)
}

/// Apply the embedded migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), ConnectError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    Ok(())
}
