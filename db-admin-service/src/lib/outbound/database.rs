use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Invalid database configuration: {0}")]
    Configuration(#[from] sqlx::Error),
}

/// Build the connection pool without contacting the server.
///
/// The service starts even when the server is down; reachability is
/// reported per request by the connection check.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, ConnectError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(&config.url)?;

    tracing::info!(
        max_connections = config.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    Ok(pool)
}
