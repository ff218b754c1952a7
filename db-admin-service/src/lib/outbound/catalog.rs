use async_trait::async_trait;
use sqlx::Connection;
use sqlx::PgPool;

use crate::domain::database::errors::DatabaseAdminError;
use crate::domain::database::ports::DatabaseCatalog;

const LIST_DATABASES: &str = "SELECT datname::text FROM pg_database ORDER BY datname";

/// Catalog backed by the `pg_database` system table.
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseCatalog for PostgresCatalog {
    async fn list_database_names(&self) -> Result<Vec<String>, DatabaseAdminError> {
        sqlx::query_scalar::<_, String>(LIST_DATABASES)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn ping(&self) -> Result<(), DatabaseAdminError> {
        let mut connection = self
            .pool
            .acquire()
            .await
            .map_err(|e| DatabaseAdminError::Unavailable(e.to_string()))?;

        connection
            .ping()
            .await
            .map_err(|e| DatabaseAdminError::Unavailable(e.to_string()))
    }
}

fn classify(err: sqlx::Error) -> DatabaseAdminError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DatabaseAdminError::Unavailable(err.to_string())
        }
        other => DatabaseAdminError::Database(other.to_string()),
    }
}
